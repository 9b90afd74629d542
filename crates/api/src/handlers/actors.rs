//! Handlers for actor routes, including the actor-film association.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use filmoteca_core::types::DbId;
use filmoteca_db::models::actor::NewActor;
use filmoteca_db::repositories::{ActorRepo, FilmActorRepo, FilmRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{ActorCreated, MessageResponse};
use crate::state::AppState;

/// GET /actors
///
/// List every actor.
pub async fn list_actors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list_all(&state.pool).await?;

    Ok(Json(actors))
}

/// POST /actors
///
/// Create one actor and echo its assigned id.
pub async fn create_actor(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewActor>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(actor_id = actor.actor_id, "Actor created");

    Ok(Json(ActorCreated {
        message: "Actor creado",
        actor_id: actor.actor_id,
    }))
}

/// POST /actors/bulk
///
/// Create a batch of actors in one transaction. All-or-nothing: a
/// malformed entry fails deserialization before any row is written,
/// and a failed insert rolls the whole batch back.
pub async fn create_actors_bulk(
    State(state): State<AppState>,
    AppJson(inputs): AppJson<Vec<NewActor>>,
) -> AppResult<impl IntoResponse> {
    let count = ActorRepo::create_many(&state.pool, &inputs).await?;

    tracing::info!(count, "Actors created in bulk");

    Ok(Json(MessageResponse {
        message: format!("{count} actores creados"),
    }))
}

/// POST /actors/{actor_id}/films/{film_id}
///
/// Insert an association row for the pair. The ids are not checked
/// here; a missing actor or film is rejected by the storage layer's
/// foreign keys and surfaces as a 409.
pub async fn associate_actor_film(
    State(state): State<AppState>,
    Path((actor_id, film_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let association = FilmActorRepo::create(&state.pool, actor_id, film_id).await?;

    tracing::info!(
        actor_id = association.actor_id,
        film_id = association.film_id,
        "Actor associated to film"
    );

    Ok(Json(MessageResponse {
        message: format!("Actor {actor_id} asociado a película {film_id}"),
    }))
}

/// GET /actors/{actor_id}/films
///
/// List the films one actor appears in. An unknown actor simply has
/// no films, so the result is an empty array rather than a 404.
pub async fn get_actor_films(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let films = FilmRepo::list_by_actor(&state.pool, actor_id).await?;

    Ok(Json(films))
}
