pub mod actors;
pub mod films;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree, mounted at the root.
///
/// ```text
/// GET    /                                greeting
///
/// GET    /actors                          list actors
/// POST   /actors                          create actor
/// POST   /actors/bulk                     create actors in batch
/// GET    /actors/{actor_id}/films         films of one actor
/// POST   /actors/{actor_id}/films/{film_id}   associate pair
///
/// GET    /films                           list films
/// POST   /films                           create film
/// GET    /films/actors                    every film with its cast
/// PUT    /films/{film_id}                 partial update
/// DELETE /films/{film_id}                 delete film
/// GET    /films/{film_id}/actors          cast of one film
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(actors::router())
        .merge(films::router())
}
