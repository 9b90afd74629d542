use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- static plain-text greeting, doubles as a liveness probe.
async fn hola_mundo() -> &'static str {
    "Hola Mundo"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hola_mundo))
}
