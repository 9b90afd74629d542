//! Repository for the `film_actor` junction table.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::film_actor::FilmActor;

/// Provides the single insert operation the junction table supports.
/// Association rows are only ever removed by the film-delete cascade.
pub struct FilmActorRepo;

impl FilmActorRepo {
    /// Insert an association row for the given pair.
    ///
    /// The referenced ids are not checked here: a missing actor or film
    /// surfaces as a foreign-key violation, a repeated pair as a
    /// unique violation on the composite key.
    pub async fn create(
        pool: &PgPool,
        actor_id: DbId,
        film_id: DbId,
    ) -> Result<FilmActor, sqlx::Error> {
        sqlx::query_as::<_, FilmActor>(
            "INSERT INTO film_actor (actor_id, film_id) \
             VALUES ($1, $2) \
             RETURNING actor_id, film_id",
        )
        .bind(actor_id)
        .bind(film_id)
        .fetch_one(pool)
        .await
    }
}
