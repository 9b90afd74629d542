//! Repository for the `film` table.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::film::{Film, FilmSummary, NewFilm, UpdateFilm};

/// Column list for `film` queries.
const FILM_COLUMNS: &str = "film_id, title, description, release_year";

/// Provides CRUD operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert one film and return the stored row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO film (title, description, release_year) \
             VALUES ($1, $2, $3) \
             RETURNING {FILM_COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(input.release_year)
            .fetch_one(pool)
            .await
    }

    /// List every film, in primary-key order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!("SELECT {FILM_COLUMNS} FROM film ORDER BY film_id");
        sqlx::query_as::<_, Film>(&query).fetch_all(pool).await
    }

    /// Find a film by its id. Absence is a valid result, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {FILM_COLUMNS} FROM film WHERE film_id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a film: absent fields keep their stored value,
    /// an explicit `null` clears a nullable field.
    ///
    /// The nullable columns carry a presence flag alongside the value,
    /// because a NULL bind alone cannot distinguish "absent" from
    /// "present with null". Returns the updated row, or `None` if the
    /// film does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!(
            "UPDATE film SET \
                 title = COALESCE($2, title), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 release_year = CASE WHEN $5 THEN $6 ELSE release_year END \
             WHERE film_id = $1 \
             RETURNING {FILM_COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|d| d.as_deref()))
            .bind(input.release_year.is_some())
            .bind(input.release_year.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a film. Association rows cascade at the storage layer.
    ///
    /// Returns `false` if no row had the given id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM film WHERE film_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the films associated with one actor.
    pub async fn list_by_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<FilmSummary>, sqlx::Error> {
        sqlx::query_as::<_, FilmSummary>(
            "SELECT f.film_id, f.title \
             FROM film f \
             JOIN film_actor fa ON fa.film_id = f.film_id \
             WHERE fa.actor_id = $1 \
             ORDER BY f.film_id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
