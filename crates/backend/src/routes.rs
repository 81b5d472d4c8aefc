use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use contracts::system::config::ConsoleConfig;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::system::handlers::console_config;
use crate::system::middleware::request_logger;

/// Host routes: runtime config, health probe and the console bundle.
///
/// Unknown paths fall back to `index.html` so client-side routes such as
/// `/rules` or `/callback?code=...` survive a hard reload.
pub fn configure_routes(console: ConsoleConfig, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let bundle = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(console_config::health))
        .route("/config.json", get(console_config::get_console_config))
        .with_state(Arc::new(console))
        .fallback_service(bundle)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::system::auth::OidcSettings;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn console() -> ConsoleConfig {
        ConsoleConfig {
            api_base_path: "https://rules.example.com/api".to_string(),
            api_docs_url: Some("https://rules.example.com/docs".to_string()),
            oidc: OidcSettings {
                client_id: "rule-console".to_string(),
                ..OidcSettings::default()
            },
        }
    }

    fn bundle_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "rule-console-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>console</html>").unwrap();
        std::fs::write(dir.join("styles.css"), "body{}").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn config_json_serves_console_settings() {
        let dir = bundle_dir("config");
        let (status, body) = get_body(configure_routes(console(), &dir), "/config.json").await;
        assert_eq!(status, StatusCode::OK);

        let served: ConsoleConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(served, console());
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let dir = bundle_dir("health");
        let (status, body) = get_body(configure_routes(console(), &dir), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn static_files_are_served_from_bundle() {
        let dir = bundle_dir("static");
        let (status, body) = get_body(configure_routes(console(), &dir), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dir = bundle_dir("spa");
        let app = configure_routes(console(), &dir);
        let (status, body) = get_body(app.clone(), "/rules").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>console</html>");

        let (status, body) = get_body(app, "/callback?code=abc&state=xyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>console</html>");
    }
}
