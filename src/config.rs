use crate::domain::cloud::LayoutOptions;
use crate::domain::model::CollectionPlan;
use crate::domain::text::StopwordFilter;
use crate::error::*;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    InvalidConfig,
}

impl IServiceError for ConfigError {
    fn error_type(&self) -> String {
        match self {
            ConfigError::InvalidConfig => "invalid_config".to_string(),
        }
    }

    fn exit_code(&self) -> i32 {
        exit_code::CONFIG
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> ServiceError {
        ServiceError::new(ConfigError::InvalidConfig, err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub output: PathBuf,
    pub seed: u64,
    /// Stopword language, e.g. `pt`.
    pub stopwords: String,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        WordCloudConfig {
            width: 1600,
            height: 800,
            max_words: 200,
            output: PathBuf::from("wordcloud.png"),
            seed: 0,
            stopwords: "pt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder (or single CSV) holding the collected tweets.
    pub data_dir: PathBuf,
    pub wordcloud: WordCloudConfig,
    pub collection: CollectionPlan,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("tweets"),
            wordcloud: WordCloudConfig::default(),
            collection: CollectionPlan::default(),
        }
    }
}

impl Config {
    /// `config.toml` in the platform configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sentitweet").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Read `path`, or the default location when none is given. Only an
    /// explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    debug!("no configuration file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))
            .map_err(|err| ServiceError::new(ConfigError::InvalidConfig, err))?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |detail: anyhow::Error| Err(ServiceError::new(ConfigError::InvalidConfig, detail));
        let plan = &self.collection;
        let cloud = &self.wordcloud;

        if plan.window_start_hour >= 24 || plan.window_end_hour >= 24 {
            return invalid(anyhow!("collection hours must be below 24"));
        }
        if plan.window_start_hour >= plan.window_end_hour {
            return invalid(anyhow!(
                "collection window starts at {} but ends at {}",
                plan.window_start_hour,
                plan.window_end_hour
            ));
        }
        if plan.step_days == 0 {
            return invalid(anyhow!("collection step_days must be at least 1"));
        }
        if cloud.width == 0 || cloud.height == 0 {
            return invalid(anyhow!("word cloud size must not be zero"));
        }
        if StopwordFilter::for_language(&cloud.stopwords).is_none() {
            return invalid(anyhow!("no stopword list for `{}`", cloud.stopwords));
        }
        Ok(())
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            width: self.wordcloud.width,
            height: self.wordcloud.height,
            max_words: self.wordcloud.max_words,
            ..Default::default()
        }
    }

    pub fn stopword_filter(&self) -> Result<StopwordFilter> {
        let filter = StopwordFilter::for_language(&self.wordcloud.stopwords).ok_or_else(|| {
            ServiceError::new(
                ConfigError::InvalidConfig,
                anyhow!("no stopword list for `{}`", self.wordcloud.stopwords),
            )
        })?;
        debug!(language = %self.wordcloud.stopwords, words = filter.len(), "loaded stopwords");
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn it_should_default_every_section() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, PathBuf::from("tweets"));
        assert_eq!(config.wordcloud.width, 1600);
        assert_eq!(config.collection.step_days, 7);
    }

    #[test]
    fn it_should_override_from_toml() {
        let config = Config::from_toml(
            r#"
            data_dir = "dados"

            [wordcloud]
            max_words = 50
            seed = 7

            [collection]
            query = "covid"
            start = "2020-07-01"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("dados"));
        assert_eq!(config.wordcloud.max_words, 50);
        assert_eq!(config.wordcloud.seed, 7);
        assert_eq!(config.wordcloud.height, 800);
        assert_eq!(config.collection.query, "covid");
        assert_eq!(
            config.collection.start,
            NaiveDate::from_ymd_opt(2020, 7, 1).unwrap()
        );
        assert_eq!(config.collection.window_start_hour, 19);
        assert_eq!(config.layout_options().max_words, 50);
    }

    #[test]
    fn it_should_reject_malformed_toml() {
        let err = Config::from_toml("data_dir = [").unwrap_err();
        assert!(err.is_error_of(ConfigError::InvalidConfig));
        assert_eq!(err.exit_code(), exit_code::CONFIG);
    }

    #[test]
    fn it_should_reject_inverted_windows() {
        let err = Config::from_toml(
            r#"
            [collection]
            window_start_hour = 21
            window_end_hour = 19
            "#,
        )
        .unwrap_err();
        assert!(err.is_error_of(ConfigError::InvalidConfig));
    }

    #[test]
    fn it_should_reject_unknown_stopword_languages() {
        let err = Config::from_toml("[wordcloud]\nstopwords = \"tlh\"").unwrap_err();
        assert!(err.is_error_of(ConfigError::InvalidConfig));
    }

    #[test]
    fn it_should_load_an_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"outros\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("outros"));
        assert!(config.stopword_filter().unwrap().is_stopword("de"));
    }

    #[test]
    fn it_should_fail_on_a_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.is_error_of(ConfigError::InvalidConfig));
    }
}
