use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request audit log: one structured event per request with method, path,
/// status and latency. Server errors are raised to `warn`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}
