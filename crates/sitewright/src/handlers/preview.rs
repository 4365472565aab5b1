//! Preview handler: re-exports the project on every request so the
//! browser always sees the latest snapshot.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::project::load_project;
use crate::state::AppState;

/// GET / - export the project in preview mode and serve the document.
///
/// The exported document carries the hot-reload client; the file watcher
/// signals connected browsers whenever the snapshot changes.
#[axum::debug_handler]
pub async fn preview_page(State(state): State<AppState>) -> Response {
    let project = match load_project(state.project_path.as_deref().map(|p| p.as_path())) {
        Ok(project) => project,
        Err(err) => {
            tracing::error!(error = %err, "failed to load project snapshot");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load project: {err}"),
            )
                .into_response();
        }
    };

    match sitewright_core::export_site(&project, &state.export_options) {
        Ok(artifact) => Html(artifact.html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "export rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Export rejected: {err}"),
            )
                .into_response()
        }
    }
}
