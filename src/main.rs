// Daily sentiment tallies, hashtag rankings and word clouds over collected tweets

#[macro_use]
mod wrapper;
pub use wrapper::*;

use crate::domain::interface::ITweetRepository;
use crate::domain::text::clean_text;
use crate::error::*;
use crate::report::OutputFormat;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::fs::File;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod infra;
mod initializer;
mod report;
mod repository;
mod schema;

#[derive(Parser, Debug)]
#[command(name = "sentitweet", version)]
#[command(about = "Sentiment, hashtag and word cloud reports over collected tweets")]
struct Cli {
    /// Configuration file, defaults to config.toml in the user config dir
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Folder of collected CSV files, or a single CSV
    #[arg(long, global = true, env = "TWEETS_DIR")]
    dir: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sentiment counts and hashtags per day
    Daily {
        /// Divide the counts by the day's total
        #[arg(long)]
        normalize: bool,
    },
    /// Hashtags ranked by occurrences
    Hashtags {
        #[arg(long)]
        top: Option<usize>,
    },
    /// Word cloud of the tweet texts
    Wordcloud {
        #[arg(long, env = "WORDCLOUD_OUTPUT")]
        output: Option<PathBuf>,
        /// Write the image instead of only listing the placed words
        #[arg(long)]
        save: bool,
        #[arg(long, env = "WORDCLOUD_SEED")]
        seed: Option<u64>,
    },
    /// Normalize texts given as arguments, or one per stdin line
    Clean { text: Vec<String> },
    /// Collection windows up to now (e.g. 2020-07-04T00:00:00)
    Plan {
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },
    /// Every collected CSV combined into one
    Merge {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    if let Err(err) = run(cli) {
        error!(error_type = %err.error_type(), "{}", err);
        if err.is_error_of(RepositoryError::SourceNotFound) {
            eprintln!("hint: point --dir or TWEETS_DIR at the folder of collected CSV files");
        }
        match format {
            OutputFormat::Json => match serde_json::to_string(&err.to_error_response()) {
                Ok(body) => eprintln!("{}", body),
                Err(_) => eprintln!("{}", err),
            },
            _ => eprintln!("error: {}", err),
        }
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.dir {
        config.data_dir = dir;
    }
    if let Command::Wordcloud { output, seed, .. } = &cli.command {
        if let Some(output) = output {
            config.wordcloud.output = output.clone();
        }
        if let Some(seed) = seed {
            config.wordcloud.seed = *seed;
        }
    }

    let app = initializer::new(config)?;
    let source = app.config.data_dir.clone();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Daily { normalize: false } => {
            let days = app.services.tweet.daily_counts(&source)?;
            report::write_daily(&mut out, cli.format, &days)
        }
        Command::Daily { normalize: true } => {
            let days = app.services.tweet.daily_shares(&source)?;
            report::write_daily(&mut out, cli.format, &days)
        }
        Command::Hashtags { top } => {
            let mut ranking = app.services.tweet.hashtag_ranking(&source)?;
            if let Some(top) = top {
                ranking.truncate(top);
            }
            report::write_hashtags(&mut out, cli.format, &ranking)
        }
        Command::Wordcloud { save, .. } => {
            let texts = app.services.tweet.texts(&source)?;
            let cloud = app
                .services
                .wordcloud
                .build(&texts, &app.config.wordcloud.output, save)?;
            let (width, height) = cloud.image.dimensions();
            info!(width, height, words = cloud.placements.len(), "rendered word cloud");
            report::write_placements(&mut out, cli.format, &cloud.placements)
        }
        Command::Clean { text } => {
            let inputs = match text.is_empty() {
                true => std::io::stdin()
                    .lock()
                    .lines()
                    .collect::<std::io::Result<Vec<String>>>()?,
                false => text,
            };
            let cleaned: Vec<String> = inputs.iter().map(|t| clean_text(t)).collect();
            report::write_texts(&mut out, cli.format, &cleaned)
        }
        Command::Plan { now } => {
            let now = now.unwrap_or_else(|| chrono::Local::now().naive_local());
            let windows = app.services.collection.windows_until(now);
            info!(windows = windows.len(), "planned collection");
            report::write_windows(&mut out, cli.format, &windows)
        }
        Command::Merge { output } => {
            let table = app.repository.tweet.load_table(&source)?;
            match output {
                Some(path) => {
                    let mut file = File::create(&path).map_err(GeneralError::output_error)?;
                    report::write_table(&mut file, &table)?;
                    info!(output = %path.display(), rows = table.len(), "merged tweets");
                    Ok(())
                }
                None => report::write_table(&mut out, &table),
            }
        }
    }
}
