//! Shared response types for API handlers.
//!
//! Mutation endpoints answer with a confirmation message, and the two
//! create endpoints additionally echo the assigned id. Typed structs
//! instead of ad-hoc `serde_json::json!` keep the wire shapes in one
//! place.

use filmoteca_core::types::DbId;
use serde::Serialize;

/// Plain `{ "message": ... }` confirmation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for `POST /actors`.
#[derive(Debug, Serialize)]
pub struct ActorCreated {
    pub message: &'static str,
    pub actor_id: DbId,
}

/// Response for `POST /films`.
#[derive(Debug, Serialize)]
pub struct FilmCreated {
    pub message: &'static str,
    pub film_id: DbId,
}
