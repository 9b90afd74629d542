//! Repository for the `actor` table.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, ActorSummary, NewActor};

/// Column list for `actor` queries.
const ACTOR_COLUMNS: &str = "actor_id, first_name, last_name";

/// Provides insert and read operations for actors. Actors are never
/// updated or deleted through the API.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert one actor and return the stored row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actor (first_name, last_name) \
             VALUES ($1, $2) \
             RETURNING {ACTOR_COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of actors in a single transaction.
    ///
    /// All-or-nothing: if any insert fails the transaction rolls back
    /// and no rows are kept. Returns the number of rows inserted.
    pub async fn create_many(pool: &PgPool, inputs: &[NewActor]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for input in inputs {
            sqlx::query("INSERT INTO actor (first_name, last_name) VALUES ($1, $2)")
                .bind(&input.first_name)
                .bind(&input.last_name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(count = inputs.len(), "Bulk actor insert committed");
        Ok(inputs.len() as u64)
    }

    /// List every actor, in primary-key order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {ACTOR_COLUMNS} FROM actor ORDER BY actor_id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// List the actors associated with one film, full name pre-joined.
    pub async fn list_by_film(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        sqlx::query_as::<_, ActorSummary>(
            "SELECT a.actor_id, a.first_name || ' ' || a.last_name AS name \
             FROM actor a \
             JOIN film_actor fa ON fa.actor_id = a.actor_id \
             WHERE fa.film_id = $1 \
             ORDER BY a.actor_id",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }
}
