use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::{Movie, MovieInput, MovieRow, ObjectId};
use crate::services::GenreService;

const COLUMNS: &str = "_id, title, description, release_date, genre";

fn into_movies(rows: Vec<MovieRow>) -> Result<Vec<Movie>> {
    rows.into_iter().map(Movie::try_from).collect()
}

fn genre_json(genre: &[ObjectId]) -> Result<String> {
    Ok(serde_json::to_string(genre)?)
}

pub struct MovieService {
    pool: DbPool,
    genres: GenreService,
}

impl MovieService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            genres: GenreService::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {COLUMNS} FROM movies ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        into_movies(rows)
    }

    pub async fn create(&self, input: MovieInput) -> Result<Movie> {
        let id = ObjectId::new();

        sqlx::query(
            r#"
            INSERT INTO movies (_id, title, description, release_date, genre)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_hex())
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_date.format("%Y-%m-%d").to_string())
        .bind(genre_json(&input.genre)?)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Created movie {} ({})", id, input.title);
        Ok(Movie {
            id,
            title: input.title,
            description: input.description,
            release_date: input.release_date,
            genre: input.genre,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Movie> {
        let oid = ObjectId::cast(id, Movie::MODEL)?;

        sqlx::query_as::<_, MovieRow>(&format!("SELECT {COLUMNS} FROM movies WHERE _id = ?"))
            .bind(oid.to_hex())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found(format!("Could not find a movie with {} ID", id)))?
            .try_into()
    }

    /// Movies tagged with the genre called `genre_name`.
    ///
    /// An unknown genre is a 404; a known genre without movies is an empty list.
    pub async fn list_by_genre_name(&self, genre_name: &str) -> Result<Vec<Movie>> {
        let genre = self
            .genres
            .find_by_name(genre_name)
            .await?
            .ok_or_else(|| Error::not_found(format!("Could not find {} genre", genre_name)))?;

        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM movies
            WHERE EXISTS (SELECT 1 FROM json_each(movies.genre) WHERE json_each.value = ?)
            ORDER BY rowid
            "#
        ))
        .bind(genre.id.to_hex())
        .fetch_all(&self.pool)
        .await?;

        into_movies(rows)
    }

    pub async fn update(&self, id: &str, input: MovieInput) -> Result<Movie> {
        let oid = ObjectId::cast(id, Movie::MODEL)?;

        sqlx::query_as::<_, MovieRow>(&format!(
            r#"
            UPDATE movies
            SET title = ?, description = ?, release_date = ?, genre = ?
            WHERE _id = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_date.format("%Y-%m-%d").to_string())
        .bind(genre_json(&input.genre)?)
        .bind(oid.to_hex())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            Error::not_found(format!(
                "Could not update a movie with {} ID because there is no movie with this ID",
                id
            ))
        })?
        .try_into()
    }

    pub async fn delete(&self, id: &str) -> Result<Movie> {
        let oid = ObjectId::cast(id, Movie::MODEL)?;

        sqlx::query_as::<_, MovieRow>(&format!(
            "DELETE FROM movies WHERE _id = ? RETURNING {COLUMNS}"
        ))
        .bind(oid.to_hex())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            Error::not_found(format!(
                "Could not delete a movie with {} ID because there is no movie with this ID",
                id
            ))
        })?
        .try_into()
    }
}
