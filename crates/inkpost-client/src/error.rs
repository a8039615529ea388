//! Client-side error types.

use inkpost_shared::FieldErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,

    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<FieldErrorBody>),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("invalid server URL: {0}")]
    Url(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}

fn summarize(errors: &[FieldErrorBody]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
