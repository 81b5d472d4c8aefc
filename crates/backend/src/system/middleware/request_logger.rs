use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Logs every request with its duration, response size and status.
///
/// The body is buffered to measure its real size, so this sits outside
/// any streaming route.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} body read failed: {}",
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_server_error() {
        tracing::error!(status, elapsed_ms, size = %size, "{} {}", method, path);
    } else if parts.status.is_client_error() {
        tracing::warn!(status, elapsed_ms, size = %size, "{} {}", method, path);
    } else {
        tracing::info!(status, elapsed_ms, size = %size, "{} {}", method, path);
    }

    Response::from_parts(parts, Body::from(bytes))
}
