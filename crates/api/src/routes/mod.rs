pub mod activities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /activities                  list, create
/// /activities/summary          id + name listing, sorted by name
/// /activities/name/{name}      case-insensitive lookup by name
/// /activities/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/activities", activities::router())
}
