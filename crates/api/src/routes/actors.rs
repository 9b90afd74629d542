//! Route definitions for actors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Actor routes mounted at `/actors`.
///
/// ```text
/// GET  /actors                            -> list_actors
/// POST /actors                            -> create_actor
/// POST /actors/bulk                       -> create_actors_bulk
/// GET  /actors/{actor_id}/films           -> get_actor_films
/// POST /actors/{actor_id}/films/{film_id} -> associate_actor_film
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors", get(actors::list_actors).post(actors::create_actor))
        .route("/actors/bulk", post(actors::create_actors_bulk))
        .route("/actors/{actor_id}/films", get(actors::get_actor_films))
        .route(
            "/actors/{actor_id}/films/{film_id}",
            post(actors::associate_actor_film),
        )
}
