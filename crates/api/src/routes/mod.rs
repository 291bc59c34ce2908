pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                  greeting
/// /health            service health
///
/// /movies            list (?genre=), create
/// /movies/{id}       get, partial update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/movies", movies::router())
}
