//! Actor row model and DTOs.

use filmoteca_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// Request body for creating an actor. Both fields are required;
/// a missing field fails deserialization before any query runs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActor {
    pub first_name: String,
    pub last_name: String,
}

/// Actor as it appears in the film-to-actors join reads:
/// `name` is the first and last name joined with a space.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorSummary {
    pub actor_id: DbId,
    pub name: String,
}
