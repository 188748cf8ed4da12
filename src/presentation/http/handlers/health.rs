use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// `GET /health` — liveness plus a catalog reachability probe.
///
/// Runs the same count query the listing endpoint depends on, so "healthy"
/// means the service can actually serve catalog requests, not just that the
/// process is up.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.joya_repo.count_all().await {
        Ok(stock_total) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "stockTotal": stock_total,
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: catalog unreachable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "version": env!("CARGO_PKG_VERSION"),
                })),
            )
        }
    }
}
