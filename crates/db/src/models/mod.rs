//! Row models and request/response DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Lightweight summary structs for the join reads

pub mod actor;
pub mod film;
pub mod film_actor;
