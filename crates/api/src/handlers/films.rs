//! Handlers for film routes.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use filmoteca_core::error::CoreError;
use filmoteca_core::types::DbId;
use filmoteca_db::models::film::{FilmWithActors, NewFilm, UpdateFilm};
use filmoteca_db::repositories::{ActorRepo, FilmRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{FilmCreated, MessageResponse};
use crate::state::AppState;

/// GET /films
///
/// List every film.
pub async fn list_films(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let films = FilmRepo::list_all(&state.pool).await?;

    Ok(Json(films))
}

/// POST /films
///
/// Create one film and echo its assigned id.
pub async fn create_film(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewFilm>,
) -> AppResult<impl IntoResponse> {
    let film = FilmRepo::create(&state.pool, &input).await?;

    tracing::info!(film_id = film.film_id, "Film created");

    Ok(Json(FilmCreated {
        message: "Película creada",
        film_id: film.film_id,
    }))
}

/// GET /films/actors
///
/// Every film with its full cast. One query per film after the film
/// listing, mirroring the read path the clients already depend on.
pub async fn list_films_with_actors(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let films = FilmRepo::list_all(&state.pool).await?;

    let mut result = Vec::with_capacity(films.len());
    for film in films {
        let actors = ActorRepo::list_by_film(&state.pool, film.film_id).await?;
        result.push(FilmWithActors {
            film_id: film.film_id,
            title: film.title,
            actors,
        });
    }

    Ok(Json(result))
}

/// PUT /films/{film_id}
///
/// Partial update: fields present in the body overwrite the stored
/// values (an explicit `null` clears a nullable field), absent fields
/// are left unchanged. 404 if the film does not exist.
pub async fn update_film(
    State(state): State<AppState>,
    Path(film_id): Path<DbId>,
    AppJson(input): AppJson<UpdateFilm>,
) -> AppResult<impl IntoResponse> {
    FilmRepo::update(&state.pool, film_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Película",
            id: film_id,
        }))?;

    tracing::info!(film_id, "Film updated");

    Ok(Json(MessageResponse {
        message: "Película actualizada".to_string(),
    }))
}

/// DELETE /films/{film_id}
///
/// Delete a film. Its association rows cascade at the storage layer.
/// 404 if the film does not exist.
pub async fn delete_film(
    State(state): State<AppState>,
    Path(film_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FilmRepo::delete(&state.pool, film_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Película",
            id: film_id,
        }));
    }

    tracing::info!(film_id, "Film deleted");

    Ok(Json(MessageResponse {
        message: "Película eliminada".to_string(),
    }))
}

/// GET /films/{film_id}/actors
///
/// The cast of one film, each actor with the pre-joined full name.
pub async fn get_film_actors(
    State(state): State<AppState>,
    Path(film_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list_by_film(&state.pool, film_id).await?;

    Ok(Json(actors))
}
