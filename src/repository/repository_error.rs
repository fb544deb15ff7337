use crate::error::*;

#[derive(Debug)]
pub enum RepositoryError {
    SourceNotFound,
    InvalidRecord,
    ReadError,
}

impl IServiceError for RepositoryError {
    fn error_type(&self) -> String {
        use RepositoryError::*;

        match self {
            SourceNotFound => "source_not_found",
            InvalidRecord => "invalid_record",
            ReadError => "read_error",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use RepositoryError::*;

        match self {
            SourceNotFound => exit_code::NO_INPUT,
            InvalidRecord => exit_code::DATA_ERR,
            ReadError => exit_code::IO_ERR,
        }
    }
}
