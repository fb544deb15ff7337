pub use crate::repository::RepositoryError;
use anyhow::Error;
use serde::*;
use std::any::Any;

/// Process exit codes, following the BSD sysexits convention.
pub mod exit_code {
    pub const DATA_ERR: i32 = 65;
    pub const NO_INPUT: i32 = 66;
    pub const SOFTWARE: i32 = 70;
    pub const CANT_CREATE: i32 = 73;
    pub const IO_ERR: i32 = 74;
    pub const CONFIG: i32 = 78;
}

pub trait IServiceError: Any {
    fn error_type(&self) -> String {
        "internal_error".to_string()
    }

    fn exit_code(&self) -> i32 {
        exit_code::SOFTWARE
    }
}

#[derive(Debug)]
pub struct ServiceError {
    type_id: std::any::TypeId,
    error_type: String,
    exit_code: i32,
    inner: Error,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    error_type: String,
    error: String,
}

impl ServiceError {
    pub fn new<E>(err: impl IServiceError, detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: From::from(detail),
        }
    }

    pub fn only(err: impl IServiceError) -> ServiceError {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: Error::msg("error"),
        }
    }

    pub fn into_inner(self) -> Error {
        self.inner
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn error_type(&self) -> String {
        self.error_type.clone()
    }

    pub fn is_error_of(&self, err: impl IServiceError) -> bool {
        self.type_id == err.type_id() && self.error_type() == err.error_type()
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: self.error_type.clone(),
            error: format!("{:#}", self.inner),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.error_type, self.inner)
    }
}

// anyhow::Error can be treated as ServiceError
impl IServiceError for Error {}

// Errors shared by every command. Keep business rules out of here; a failure
// worth handling on its own gets its own enum next to the code raising it.
pub enum GeneralError {
    SerializationError,
    OutputError,
}

impl GeneralError {
    pub fn serialization_error<E>(detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError::new(GeneralError::SerializationError, detail)
    }

    pub fn output_error<E>(detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError::new(GeneralError::OutputError, detail)
    }
}

impl IServiceError for GeneralError {
    fn error_type(&self) -> String {
        use GeneralError::*;

        match self {
            SerializationError => "serialization_error".to_string(),
            OutputError => "output_error".to_string(),
        }
    }

    fn exit_code(&self) -> i32 {
        use GeneralError::*;

        match self {
            SerializationError => exit_code::SOFTWARE,
            OutputError => exit_code::IO_ERR,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> ServiceError {
        GeneralError::serialization_error(err)
    }
}
