use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use crate::schema::tweet_columns;
use csv::StringRecord;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Header and cells of one CSV row, mapped onto the domain model by column
/// name.
pub struct TweetRecord<'a> {
    headers: &'a StringRecord,
    cells: StringRecord,
}

impl<'a> TweetRecord<'a> {
    pub fn new(headers: &'a StringRecord, row: &[String]) -> Self {
        TweetRecord {
            headers,
            cells: row.iter().collect(),
        }
    }

    pub fn to_model(&self) -> Result<Tweet> {
        Ok(self.cells.deserialize::<Tweet>(Some(self.headers))?)
    }
}

pub struct TweetRepository {
    csv: Arc<dyn ICsvReader + Sync + Send>,
}

impl TweetRepository {
    pub fn new(csv: Arc<dyn ICsvReader + Sync + Send>) -> Self {
        Self { csv }
    }
}

impl ITweetRepository for TweetRepository {
    fn load_table(&self, source: &Path) -> Result<TweetTable> {
        if !source.exists() {
            return Err(ServiceError::new(
                RepositoryError::SourceNotFound,
                anyhow::anyhow!("{} does not exist", source.display()),
            ));
        }
        let table = if source.is_dir() {
            self.csv.read_folder(source)?
        } else {
            self.csv.read_file(source)?
        };
        info!(source = %source.display(), rows = table.len(), "loaded tweets");
        Ok(table)
    }

    fn load_tweets(&self, source: &Path) -> Result<Vec<Tweet>> {
        let table = self.load_table(source)?;
        if table.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(missing) = tweet_columns::REQUIRED
            .iter()
            .find(|column| !table.has_column(column))
        {
            return Err(ServiceError::new(
                RepositoryError::InvalidRecord,
                anyhow::anyhow!("column `{}` not found in {}", missing, source.display()),
            ));
        }

        let headers: StringRecord = table.columns().iter().collect();
        table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                TweetRecord::new(&headers, row).to_model().map_err(|err| {
                    ServiceError::new(
                        RepositoryError::InvalidRecord,
                        err.into_inner().context(format!("row {}", i + 1)),
                    )
                })
            })
            .collect::<Result<Vec<Tweet>>>()
    }
}
