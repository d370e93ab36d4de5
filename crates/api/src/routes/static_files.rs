//! The browser front end: `/` redirects into `/static`, which is served
//! straight from disk.

use std::path::Path;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

const INDEX_PATH: &str = "/static/index.html";

async fn index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(static_dir))
}
