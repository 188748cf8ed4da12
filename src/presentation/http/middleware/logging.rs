use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request on completion, picking the level from the status
/// class: 5xx -> error, 4xx -> warn, everything else -> info.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("{} {} {} - completed in {}ms", method, uri, status, elapsed_ms);
    } else if status.is_client_error() {
        tracing::warn!("{} {} {} - completed in {}ms", method, uri, status, elapsed_ms);
    } else {
        tracing::info!("{} {} {} - completed in {}ms", method, uri, status, elapsed_ms);
    }

    response
}
