//! Film row model and DTOs.

use filmoteca_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::actor::ActorSummary;

/// A row from the `film` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

/// Request body for creating a film. Only `title` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

/// Request body for partially updating a film. Absent fields are
/// left unchanged; an explicit JSON `null` clears a nullable field.
///
/// The nullable columns use a double `Option` so the two cases stay
/// distinguishable after deserialization: outer `None` means the key
/// was absent, `Some(None)` means the key was present with `null`.
/// `title` is NOT NULL, so a single `Option` suffices there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilm {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub release_year: Option<Option<i32>>,
}

/// Wrap a present value (including `null`) in `Some`, so only a missing
/// key produces the outer `None`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}

/// Film as it appears when listing an actor's films.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmSummary {
    pub film_id: DbId,
    pub title: String,
}

/// One film with its full cast, for the films-with-actors listing.
#[derive(Debug, Clone, Serialize)]
pub struct FilmWithActors {
    pub film_id: DbId,
    pub title: String,
    pub actors: Vec<ActorSummary>,
}
