use serde_json::{Map, Value};

use super::{Report, Schema, ValidationFailure};
use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::{GenreInput, MovieInput};
use crate::services::GenreService;

pub fn duplicate_genre_message(name: &str) -> String {
    format!("{name} already exists. Genre should be unique!")
}

impl Schema for GenreInput {
    const FIELDS: &'static [&'static str] = &["name"];

    fn check(payload: &Map<String, Value>, report: &mut Report) {
        report.string(payload, "name", 3, Some(25));
    }

    fn from_payload(payload: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(payload))?)
    }

    // Runs on every create and update, even when an update keeps the
    // record's current name.
    fn check_external(&self, pool: &DbPool) -> impl Future<Output = Result<()>> + Send {
        async move {
            let existing = GenreService::new(pool.clone())
                .find_by_name(&self.name)
                .await?;

            match existing {
                Some(_) => Err(Error::Validation(ValidationFailure::single(
                    "name",
                    duplicate_genre_message(&self.name),
                ))),
                None => Ok(()),
            }
        }
    }
}

impl Schema for MovieInput {
    const FIELDS: &'static [&'static str] = &["title", "description", "release_date", "genre"];

    fn check(payload: &Map<String, Value>, report: &mut Report) {
        report.string(payload, "title", 1, None);
        report.string(payload, "description", 5, None);
        report.date(payload, "release_date");
        report.object_ids(payload, "genre", 1);
    }

    fn from_payload(payload: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(payload))?)
    }
}
