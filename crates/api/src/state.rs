/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the pool is internally
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: filmoteca_db::DbPool,
}
