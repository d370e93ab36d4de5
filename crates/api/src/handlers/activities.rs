//! Handlers for the activity directory.
//!
//! Listing, signing up and unregistering participants. No authentication;
//! the participant is identified only by the `email` query parameter.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query string shared by signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// GET /activities
///
/// The whole catalog as `name -> activity`, in catalog order.
pub async fn list_activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.activities.list_all().await)
}

/// POST /activities/{activity_name}/signup?email=...
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(EmailParams { email }) = params?;

    state
        .activities
        .add_participant(&activity_name, &email)
        .await?;

    tracing::info!(activity = %activity_name, email = %email, "Participant signed up");

    Ok(Json(MessageResponse::new(format!(
        "Signed up {email} for {activity_name}"
    ))))
}

/// DELETE /activities/{activity_name}/participants?email=...
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(EmailParams { email }) = params?;

    state
        .activities
        .remove_participant(&activity_name, &email)
        .await?;

    tracing::info!(activity = %activity_name, email = %email, "Participant unregistered");

    Ok(Json(MessageResponse::new(format!(
        "Unregistered {email} from {activity_name}"
    ))))
}
