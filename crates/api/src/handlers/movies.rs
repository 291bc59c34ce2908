//! Handlers for the `/movies` resource.
//!
//! Each handler validates its input before touching the store; validation
//! failures and unknown ids never mutate anything.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_db::repositories::MovieRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Confirmation body for a successful delete.
pub const MOVIE_DELETED_MESSAGE: &str = "Pelicula borrada";

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /movies
///
/// List all movies, or only those with a matching genre when `?genre=` is
/// given (case-insensitive, store order preserved).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let movies = match params.genre() {
        Some(genre) => MovieRepo::list_by_genre(&state.store, genre).await,
        None => MovieRepo::list(&state.store).await,
    };

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| not_found(id))?;

    Ok(Json(movie))
}

/// POST /movies
///
/// Validate a complete movie and store it under a new server-generated id.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let input = state.validator.validate_full(&body).map_err(CoreError::from)?;

    let movie = MovieRepo::create(&state.store, input).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Validate a partial movie and shallow-merge it onto the stored record.
/// An `id` in the body is ignored.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let patch = state
        .validator
        .validate_partial(&body)
        .map_err(CoreError::from)?;

    let movie = MovieRepo::update(&state.store, &id, &patch)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::delete(&state.store, &id)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie deleted");

    Ok(Json(MessageResponse {
        message: MOVIE_DELETED_MESSAGE,
    }))
}
