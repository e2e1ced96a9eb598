use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Preference error: {0}")]
    PreferenceError(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ApiError::RepositoryError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::EncodingError(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
