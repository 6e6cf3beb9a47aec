//! Request payload validation.
//!
//! A [`Schema`] declares the structural rules for one request body. The
//! pipeline in [`validate`] runs every structural rule against the raw JSON
//! and collects all violations, converts the payload into the typed input,
//! then runs the schema's read-only external checks against the store.

mod rules;
mod schemas;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::db::DbPool;
use crate::error::Result;

pub use rules::{OBJECT_ID_PATTERN, Report};
pub use schemas::duplicate_genre_message;

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub path: String,
    pub message: String,
}

impl ValidationDetail {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A rejected payload, carrying every violated rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct ValidationFailure {
    details: Vec<ValidationDetail>,
}

impl ValidationFailure {
    pub fn new(details: Vec<ValidationDetail>) -> Self {
        Self { details }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationDetail::new(path, message)])
    }

    pub fn details(&self) -> &[ValidationDetail] {
        &self.details
    }

    pub fn message(&self) -> String {
        self.details
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

/// Declared shape of a request body
pub trait Schema: Sized {
    /// Keys a payload may carry
    const FIELDS: &'static [&'static str];

    /// Records every structural violation of `payload` on `report`.
    fn check(payload: &Map<String, Value>, report: &mut Report);

    /// Builds the typed input. Only called once `check` reported nothing.
    fn from_payload(payload: Map<String, Value>) -> Result<Self>;

    /// Read-only checks that need the store.
    fn check_external(&self, _pool: &DbPool) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }
}

/// Validates a raw request body against `S`.
///
/// Structural violations are all reported together; external checks only
/// run on a structurally valid payload. Nothing is written to the store.
pub async fn validate<S: Schema>(pool: &DbPool, payload: Value) -> Result<S> {
    let Value::Object(payload) = payload else {
        return Err(ValidationFailure::single("value", r#""value" must be of type object"#).into());
    };

    let mut report = Report::default();
    S::check(&payload, &mut report);
    report.reject_unknown(&payload, S::FIELDS);
    report.finish()?;

    let input = S::from_payload(payload)?;
    input.check_external(pool).await?;

    tracing::debug!("Payload passed validation");
    Ok(input)
}
