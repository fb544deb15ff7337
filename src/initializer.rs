use crate::config::Config;
use crate::domain::service;
use crate::error::Result;
use crate::infra;
use crate::repository;
use std::sync::Arc;

#[derive(Clone)]
pub struct Infras {
    pub csv: Arc<infra::CsvReader>,
    pub font: Arc<infra::BitmapFont>,
}

pub fn infras() -> Infras {
    Infras {
        csv: Arc::new(infra::CsvReader::new()),
        font: Arc::new(infra::BitmapFont::new()),
    }
}

#[derive(Clone)]
pub struct Repository {
    pub tweet: Arc<repository::TweetRepository>,
}

pub fn repository(infras: &Infras) -> Repository {
    let tweet = Arc::new(repository::TweetRepository::new(infras.csv.clone()));
    Repository { tweet }
}

#[derive(Clone)]
pub struct Services {
    pub tweet: service::TweetService,
    pub wordcloud: service::WordCloudService,
    pub collection: service::CollectionService,
}

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub repository: Repository,
    pub services: Services,
}

pub fn new(config: Config) -> Result<AppContext> {
    let infras = infras();
    let repository = repository(&infras);
    let services = Services {
        tweet: service::TweetService::new(repository.tweet.clone()),
        wordcloud: service::WordCloudService::new(
            infras.font.clone(),
            config.stopword_filter()?,
            config.layout_options(),
            config.wordcloud.seed,
        ),
        collection: service::CollectionService::new(config.collection.clone()),
    };
    Ok(AppContext {
        config,
        repository,
        services,
    })
}
