use axum::{http::StatusCode, response::IntoResponse, Json};

/// GET /health - liveness probe.
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok"
        })),
    )
}
