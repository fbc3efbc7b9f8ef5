//! Route definitions for the activity resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity routes mounted at `/activities`.
///
/// ```text
/// GET    /              -> list_activities
/// POST   /              -> create_activity
/// GET    /summary       -> list_activity_summaries
/// GET    /name/{name}   -> get_activity_by_name
/// GET    /{id}          -> get_activity
/// PUT    /{id}          -> update_activity
/// DELETE /{id}          -> delete_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route("/summary", get(activities::list_activity_summaries))
        .route("/name/{name}", get(activities::get_activity_by_name))
        .route(
            "/{id}",
            get(activities::get_activity)
                .put(activities::update_activity)
                .delete(activities::delete_activity),
        )
}
