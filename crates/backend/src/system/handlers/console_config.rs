use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use contracts::system::config::ConsoleConfig;
use std::sync::Arc;

/// GET /config.json
///
/// Runtime settings the console reads before it mounts. Never cached so a
/// config change is picked up on the next page load.
pub async fn get_console_config(State(config): State<Arc<ConsoleConfig>>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(config.as_ref().clone()),
    )
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
