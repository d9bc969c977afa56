use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one structured `api_request` event per call with method, path,
/// status and latency. Request bodies carry questionnaire answers and are
/// never logged.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %path, status, elapsed_ms, "api_request");
    }

    response
}
