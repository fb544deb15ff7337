use crate::domain::interface::*;
use crate::domain::model::TweetTable;
use crate::error::*;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> ServiceError {
        if err.is_io_error() {
            ServiceError::new(RepositoryError::ReadError, err)
        } else {
            ServiceError::new(RepositoryError::InvalidRecord, err)
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> ServiceError {
        match err.kind() {
            std::io::ErrorKind::NotFound => ServiceError::new(RepositoryError::SourceNotFound, err),
            _ => ServiceError::new(RepositoryError::ReadError, err),
        }
    }
}

/// Reads the per-day CSV exports of the collector.
#[derive(Clone, Default)]
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> CsvReader {
        CsvReader
    }
}

impl ICsvReader for CsvReader {
    fn read_file(&self, path: &Path) -> Result<TweetTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|err| with_path(err, path))?;

        let columns = reader
            .headers()
            .map_err(|err| with_path(err, path))?
            .iter()
            .map(str::to_string)
            .collect();
        let mut table = TweetTable::new(columns);

        for record in reader.records() {
            let record = record.map_err(|err| with_path(err, path))?;
            table.push_row(record.iter().map(str::to_string).collect());
        }

        debug!(path = %path.display(), rows = table.len(), "read csv");
        Ok(table)
    }

    /// Every entry of the folder is read as a CSV, in directory listing order.
    fn read_folder(&self, path: &Path) -> Result<TweetTable> {
        let entries = fs::read_dir(path)
            .with_context(|| format!("cannot list {}", path.display()))
            .map_err(|err| ServiceError::new(RepositoryError::SourceNotFound, err))?;

        let mut combined = TweetTable::default();
        for entry in entries {
            let entry = entry?;
            combined.append(self.read_file(&entry.path())?);
        }
        Ok(combined)
    }
}

fn with_path(err: csv::Error, path: &Path) -> ServiceError {
    let kind = if err.is_io_error() {
        RepositoryError::ReadError
    } else {
        RepositoryError::InvalidRecord
    };
    ServiceError::new(
        kind,
        anyhow::Error::new(err).context(format!("failed to read {}", path.display())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn it_should_concatenate_every_file_of_a_folder() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "2020_19_06.csv",
            "date,sentiment,hashtags,tweet\n2020-06-19,Positivo,\"['a']\",\"oi, tudo bem\"\n",
        );
        write(
            dir.path(),
            "2020_26_06.csv",
            "date,sentiment,hashtags,tweet\n2020-06-26,Negativo,[],ruim\n",
        );

        let table = CsvReader::new().read_folder(dir.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["date", "sentiment", "hashtags", "tweet"]);

        let mut rows = table.rows().to_vec();
        rows.sort();
        assert_eq!(rows[0], vec!["2020-06-19", "Positivo", "['a']", "oi, tudo bem"]);
        assert_eq!(rows[1], vec!["2020-06-26", "Negativo", "[]", "ruim"]);
    }

    #[test]
    fn it_should_keep_row_order_within_a_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "day.csv", "date,tweet\n2020-06-19,b\n2020-06-19,a\n");

        let table = CsvReader::new().read_file(&dir.path().join("day.csv")).unwrap();
        assert_eq!(table.rows()[0][1], "b");
        assert_eq!(table.rows()[1][1], "a");
    }

    #[test]
    fn it_should_read_an_empty_folder_as_an_empty_table() {
        let dir = tempdir().unwrap();
        let table = CsvReader::new().read_folder(dir.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn it_should_fail_on_a_missing_folder() {
        let dir = tempdir().unwrap();
        let err = CsvReader::new()
            .read_folder(&dir.path().join("missing"))
            .unwrap_err();
        assert!(err.is_error_of(RepositoryError::SourceNotFound));
    }

    #[test]
    fn it_should_fail_on_a_ragged_csv() {
        let dir = tempdir().unwrap();
        write(dir.path(), "bad.csv", "date,tweet\n2020-06-19,a,extra\n");
        let err = CsvReader::new().read_folder(dir.path()).unwrap_err();
        assert!(err.is_error_of(RepositoryError::InvalidRecord));
    }

    #[test]
    fn it_should_fail_on_a_nested_folder() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        let err = CsvReader::new().read_folder(dir.path()).unwrap_err();
        assert!(err.is_error_of(RepositoryError::ReadError));
    }
}
