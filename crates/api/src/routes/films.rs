//! Route definitions for films.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Film routes mounted at `/films`.
///
/// The static `/films/actors` segment takes priority over the
/// `/films/{film_id}` parameter, so the combined listing keeps its
/// own path.
///
/// ```text
/// GET    /films                    -> list_films
/// POST   /films                    -> create_film
/// GET    /films/actors             -> list_films_with_actors
/// PUT    /films/{film_id}          -> update_film
/// DELETE /films/{film_id}          -> delete_film
/// GET    /films/{film_id}/actors   -> get_film_actors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::list_films).post(films::create_film))
        .route("/films/actors", get(films::list_films_with_actors))
        .route(
            "/films/{film_id}",
            put(films::update_film).delete(films::delete_film),
        )
        .route("/films/{film_id}/actors", get(films::get_film_actors))
}
