use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::models::ObjectId;

/// Database row representation with String IDs for SQLite TEXT columns
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GenreRow {
    #[sqlx(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "_id": "653250a6b81c59abd554d45d", "name": "comedy" }))]
pub struct Genre {
    /// The unique identifier of the genre
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// The name of the genre
    pub name: String,
}

impl Genre {
    pub const MODEL: &'static str = "Genre";
}

impl TryFrom<GenreRow> for Genre {
    type Error = Error;

    fn try_from(row: GenreRow) -> Result<Self> {
        let id = row
            .id
            .parse()
            .map_err(|_| Error::Internal(format!("stored genre id {:?} is corrupt", row.id)))?;

        Ok(Self { id, name: row.name })
    }
}

/// Body of genre create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[schema(as = GenreBody, example = json!({ "name": "comedy" }))]
pub struct GenreInput {
    /// The name of the genre, 3 to 25 characters, unique
    pub name: String,
}
