use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};

use super::{ValidationDetail, ValidationFailure};

pub const OBJECT_ID_PATTERN: &str = "^[0-9a-fA-F]{24}$";

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(OBJECT_ID_PATTERN).expect("object id pattern compiles"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Collects violations while a schema walks a payload
#[derive(Debug, Default)]
pub struct Report {
    details: Vec<ValidationDetail>,
}

impl Report {
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.details.push(ValidationDetail::new(path, message));
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationFailure> {
        if self.details.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.details))
        }
    }

    /// Required string whose length (in characters) lies in `min..=max`.
    pub fn string(
        &mut self,
        payload: &Map<String, Value>,
        key: &str,
        min: usize,
        max: Option<usize>,
    ) {
        let Some(value) = self.required(payload, key) else {
            return;
        };
        let Some(s) = value.as_str() else {
            self.add(key, format!(r#""{key}" must be a string"#));
            return;
        };

        let len = s.chars().count();
        if len == 0 {
            self.add(key, format!(r#""{key}" is not allowed to be empty"#));
        } else if len < min {
            self.add(
                key,
                format!(r#""{key}" length must be at least {min} characters long"#),
            );
        } else if let Some(max) = max.filter(|max| len > *max) {
            self.add(
                key,
                format!(r#""{key}" length must be less than or equal to {max} characters long"#),
            );
        }
    }

    /// Required calendar date written as `YYYY-MM-DD`.
    pub fn date(&mut self, payload: &Map<String, Value>, key: &str) {
        let Some(value) = self.required(payload, key) else {
            return;
        };

        let valid = value.as_str().is_some_and(|s| {
            DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        });
        if !valid {
            self.add(key, format!(r#""{key}" must be in YYYY-MM-DD format"#));
        }
    }

    /// Required array of at least `min_items` object id strings.
    pub fn object_ids(&mut self, payload: &Map<String, Value>, key: &str, min_items: usize) {
        let Some(value) = self.required(payload, key) else {
            return;
        };
        let Some(items) = value.as_array() else {
            self.add(key, format!(r#""{key}" must be an array"#));
            return;
        };

        if items.len() < min_items {
            self.add(
                key,
                format!(r#""{key}" must contain at least {min_items} items"#),
            );
            return;
        }

        for (i, item) in items.iter().enumerate() {
            let path = format!("{key}[{i}]");
            match item.as_str() {
                None => self.add(&path, format!(r#""{path}" must be a string"#)),
                Some(s) if !OBJECT_ID_RE.is_match(s) => self.add(
                    &path,
                    format!(
                        r#""{path}" with value "{s}" fails to match the required pattern: /{OBJECT_ID_PATTERN}/"#
                    ),
                ),
                Some(_) => {}
            }
        }
    }

    /// Reports every key not listed in `allowed`.
    pub fn reject_unknown(&mut self, payload: &Map<String, Value>, allowed: &[&str]) {
        for key in payload.keys() {
            if !allowed.contains(&key.as_str()) {
                self.add(key.as_str(), format!(r#""{key}" is not allowed"#));
            }
        }
    }

    fn required<'a>(&mut self, payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
        let value = payload.get(key);
        if value.is_none() {
            self.add(key, format!(r#""{key}" is required"#));
        }
        value
    }
}
