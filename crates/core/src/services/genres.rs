use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::{Genre, GenreInput, GenreRow, ObjectId};
use crate::validation::{ValidationFailure, duplicate_genre_message};

fn not_found(id: &str) -> Error {
    Error::not_found(format!("Could not find a genre with {} ID", id))
}

/// A unique-index violation on `name` is a validation failure, not a 500
fn map_write_error(name: &str) -> impl FnOnce(sqlx::Error) -> Error {
    move |err| {
        if let sqlx::Error::Database(db) = &err
            && db.is_unique_violation()
        {
            return ValidationFailure::single("name", duplicate_genre_message(name)).into();
        }
        err.into()
    }
}

#[derive(Clone)]
pub struct GenreService {
    pool: DbPool,
}

impl GenreService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Genre>> {
        sqlx::query_as::<_, GenreRow>("SELECT _id, name FROM genres ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Genre::try_from)
            .collect()
    }

    pub async fn create(&self, input: GenreInput) -> Result<Genre> {
        let id = ObjectId::new();

        sqlx::query("INSERT INTO genres (_id, name) VALUES (?, ?)")
            .bind(id.to_hex())
            .bind(&input.name)
            .execute(&self.pool)
            .await
            .map_err(map_write_error(&input.name))?;

        tracing::debug!("Created genre {} ({})", id, input.name);
        Ok(Genre {
            id,
            name: input.name,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Genre> {
        let oid = ObjectId::cast(id, Genre::MODEL)?;

        sqlx::query_as::<_, GenreRow>("SELECT _id, name FROM genres WHERE _id = ?")
            .bind(oid.to_hex())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?
            .try_into()
    }

    /// Exact, case-sensitive name lookup
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Genre>> {
        sqlx::query_as::<_, GenreRow>("SELECT _id, name FROM genres WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .map(Genre::try_from)
            .transpose()
    }

    pub async fn update(&self, id: &str, input: GenreInput) -> Result<Genre> {
        let oid = ObjectId::cast(id, Genre::MODEL)?;

        sqlx::query_as::<_, GenreRow>(
            "UPDATE genres SET name = ? WHERE _id = ? RETURNING _id, name",
        )
        .bind(&input.name)
        .bind(oid.to_hex())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error(&input.name))?
        .ok_or_else(|| not_found(id))?
        .try_into()
    }

    /// Removes the genre and returns it. Movies referencing it keep the id.
    pub async fn delete(&self, id: &str) -> Result<Genre> {
        let oid = ObjectId::cast(id, Genre::MODEL)?;

        sqlx::query_as::<_, GenreRow>("DELETE FROM genres WHERE _id = ? RETURNING _id, name")
            .bind(oid.to_hex())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?
            .try_into()
    }
}
