use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::ValidationFailure;

pub type Result<T> = std::result::Result<T, Error>;

/// Message sent to clients for every failure outside the known taxonomy
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("{0}")]
    Cast(#[from] CastError),

    /// Raised by services with an explicit status, e.g. not found
    #[error("{message}")]
    Domain { status: u16, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A malformed identifier handed to a lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(r#"Cast to ObjectId failed for value "{value}" (type string) at path "{path}" for model "{model}""#)]
pub struct CastError {
    pub value: String,
    pub path: &'static str,
    pub model: &'static str,
}

impl Error {
    pub fn domain(status: u16, message: impl Into<String>) -> Self {
        Error::Domain {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::domain(404, message)
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::Cast(_) => 422,
            Error::Domain { status, .. } => *status,
            _ => 500,
        }
    }
}

/// Client-facing shape of every failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "statusCode": 404, "message": "Not Found" }))]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

/// Maps any failure to the status and message a client is allowed to see.
///
/// Validation and cast failures keep their detail (without double quotes),
/// domain errors keep what they carry, everything else collapses to a
/// generic 500.
pub fn normalize(err: &Error) -> ErrorBody {
    let message = match err {
        Error::Validation(failure) => strip_quotes(&failure.message()),
        Error::Cast(cast) => strip_quotes(&cast.to_string()),
        Error::Domain { message, .. } => message.clone(),
        _ => INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    };

    ErrorBody {
        status_code: err.status_code(),
        message,
    }
}

fn strip_quotes(message: &str) -> String {
    message.replace('"', "")
}
