pub mod activities;
pub mod health;
pub mod static_files;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (without middleware).
///
/// ```text
/// /health                                      service health
/// /                                            redirect to the web UI
/// /static/*                                    web UI assets
/// /activities                                  list
/// /activities/{activity_name}/signup           sign up (POST)
/// /activities/{activity_name}/participants     unregister (DELETE)
/// ```
pub fn app_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(static_files::router(&state.config.static_dir))
        .merge(activities::router())
}
