use crate::dto::common::ErrorResponse;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The API refused a submission and said which fields were wrong.
    #[error("Validation error: {}", .0.error)]
    Rejected(ErrorResponse),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Invalid QR payload: {0}")]
    InvalidQrPayload(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Maps an HTTP status and server message onto the closest variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            400 | 422 => Self::Validation(message),
            _ => Self::Http { status, message },
        }
    }

    /// Builds the error for a failed response body: field-level rejections keep their detail.
    pub fn from_response(status: u16, body: ErrorResponse) -> Self {
        if (status == 400 || status == 422) && !body.field_errors.is_empty() {
            Self::Rejected(body)
        } else {
            Self::from_status(status, body.error)
        }
    }

    /// Whether the session behind the request is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
