use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::models::ObjectId;

/// Database row representation; `genre` holds the JSON array of genre ids
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRow {
    #[sqlx(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "65325371d5dd96472bc2cbe9",
    "title": "Dial M for Murder",
    "description": "A former tennis star arranges the murder of his adulterous wife",
    "release_date": "1954-05-29",
    "genre": ["653250c0b81c59abd554d463", "653250b1b81c59abd554d460"]
}))]
pub struct Movie {
    /// The unique identifier of the movie
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// Title of the movie
    pub title: String,
    /// Short description of the movie
    pub description: String,
    /// Release date of the movie
    #[schema(value_type = String, format = Date)]
    pub release_date: NaiveDate,
    /// Identifiers of the movie's genres
    #[schema(value_type = Vec<String>)]
    pub genre: Vec<ObjectId>,
}

impl Movie {
    pub const MODEL: &'static str = "Movie";
}

impl TryFrom<MovieRow> for Movie {
    type Error = Error;

    fn try_from(row: MovieRow) -> Result<Self> {
        let id = row
            .id
            .parse()
            .map_err(|_| Error::Internal(format!("stored movie id {:?} is corrupt", row.id)))?;
        let release_date = NaiveDate::parse_from_str(&row.release_date, "%Y-%m-%d")
            .map_err(|e| Error::Internal(format!("stored release date is corrupt: {}", e)))?;
        let genre = serde_json::from_str(&row.genre)?;

        Ok(Self {
            id,
            title: row.title,
            description: row.description,
            release_date,
            genre,
        })
    }
}

/// Body of movie create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[schema(as = MovieBody, example = json!({
    "title": "Dial M for Murder",
    "description": "A former tennis star arranges the murder of his adulterous wife",
    "release_date": "1954-05-29",
    "genre": ["653250c0b81c59abd554d463", "653250b1b81c59abd554d460"]
}))]
pub struct MovieInput {
    /// Title of the movie, at least 1 character
    pub title: String,
    /// Short description of the movie, at least 5 characters
    pub description: String,
    /// Release date as YYYY-MM-DD
    #[schema(value_type = String, format = Date)]
    pub release_date: NaiveDate,
    /// At least one genre identifier
    #[schema(value_type = Vec<String>)]
    pub genre: Vec<ObjectId>,
}
