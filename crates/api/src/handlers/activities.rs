//! Handlers for the activity resource.
//!
//! Identifiers in the path are parsed before the store is touched, so a
//! malformed id is always a 400 and never a lookup miss. Each handler makes
//! at most one store call. Create and update bodies may be JSON or
//! form-encoded.

use activities_core::activity::{ActivityId, ActivityPatch, NewActivity};
use activities_core::error::CoreError;
use activities_db::models::activity::{Activity, ActivitySummary};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Parse the `{id}` path segment. A segment that cannot even be decoded
/// (e.g. invalid UTF-8) is an invalid identifier too.
fn parse_id(path: Result<Path<String>, PathRejection>) -> AppResult<ActivityId> {
    let Path(raw) =
        path.map_err(|rejection| CoreError::InvalidIdentifier(rejection.body_text()))?;
    Ok(raw.parse::<ActivityId>()?)
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// POST /activities
///
/// Create an activity. Every business field is required.
pub async fn create_activity(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<NewActivity>,
) -> AppResult<impl IntoResponse> {
    let fields = input.validate()?;

    let activity = state.store.create(&fields).await?;

    tracing::info!(
        activity_id = %activity.id,
        activity_name = %activity.activity_name,
        "Activity created",
    );

    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /activities
pub async fn list_activities(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = state.store.list().await?;
    Ok(Json(activities))
}

/// GET /activities/summary
///
/// `{id, activityName}` of every activity, sorted by name.
pub async fn list_activity_summaries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActivitySummary>>> {
    let summaries = state.store.list_summaries().await?;
    Ok(Json(summaries))
}

/// GET /activities/name/{name}
///
/// Case-insensitive exact match on the activity name.
pub async fn get_activity_by_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Activity>> {
    let Path(name) = name?;
    let activity = state
        .store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| CoreError::activity_not_found(&name))?;

    Ok(Json(activity))
}

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

/// GET /activities/{id}
pub async fn get_activity(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Activity>> {
    let id = parse_id(raw_id)?;

    let activity = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::activity_not_found(id.to_string()))?;

    Ok(Json(activity))
}

/// PUT /activities/{id}
///
/// Partially update an activity. Omitted fields keep their values.
pub async fn update_activity(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<JsonOrForm<ActivityPatch>, AppError>,
) -> AppResult<Json<Activity>> {
    let id = parse_id(raw_id)?;
    let JsonOrForm(input) = payload?;
    let patch = input.validate()?;

    let activity = state
        .store
        .update(id, &patch)
        .await?
        .ok_or_else(|| CoreError::activity_not_found(id.to_string()))?;

    tracing::info!(activity_id = %id, "Activity updated");

    Ok(Json(activity))
}

/// DELETE /activities/{id}
pub async fn delete_activity(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(raw_id)?;

    if !state.store.delete(id).await? {
        return Err(CoreError::activity_not_found(id.to_string()).into());
    }

    tracing::info!(activity_id = %id, "Activity deleted");

    Ok(Json(MessageResponse {
        message: "Activity deleted successfully",
    }))
}
