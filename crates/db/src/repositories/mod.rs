//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Errors propagate as
//! `sqlx::Error`; classification into HTTP responses happens in the API
//! crate.

pub mod actor_repo;
pub mod film_actor_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use film_actor_repo::FilmActorRepo;
pub use film_repo::FilmRepo;
