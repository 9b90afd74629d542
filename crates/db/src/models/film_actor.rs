//! Actor-film association row model.

use filmoteca_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `film_actor` junction table. Pure association,
/// no attributes beyond the composite key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmActor {
    pub actor_id: DbId,
    pub film_id: DbId,
}
