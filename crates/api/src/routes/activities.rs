//! Route definitions for the activity directory.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// ```text
/// GET    /activities                                -> list_activities
/// POST   /activities/{activity_name}/signup         -> signup
/// DELETE /activities/{activity_name}/participants   -> unregister
/// ```
///
/// `{activity_name}` is percent-decoded before lookup, so `Chess%20Club`
/// resolves to "Chess Club".
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/participants",
            delete(activities::unregister),
        )
}
