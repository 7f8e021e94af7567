// src/routes.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

use crate::handlers::{api, web};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // WEB UI ROUTES
        // ==================
        .route("/", get(web::index))
        .route("/activity", get(web::activity))
        // ==================
        // API ROUTES
        // ==================
        .route("/api/activity", get(api::get_activity))
        .route("/health", get(api::health))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::github::ActivityClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(api_url: &str) -> Router {
        let config = Config::for_api(api_url);
        let activity_client = ActivityClient::from_config(&config).unwrap();
        create_router(Arc::new(AppState {
            config,
            activity_client,
        }))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_for("http://127.0.0.1:1").oneshot(request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#""status":"ok""#));
    }

    #[tokio::test]
    async fn test_index_renders_loading_panel() {
        let response = app_for("http://127.0.0.1:1").oneshot(request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Loading repository activity..."));
    }

    #[tokio::test]
    async fn test_activity_fragment_degrades_on_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let response = app_for(&mock_server.uri())
            .oneshot(request("/activity"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Unable to load activity"));
        assert!(html.contains("https://github.com/dantte-lp/wolfguard"));
    }

    #[tokio::test]
    async fn test_activity_json_loaded() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/dantte-lp/wolfguard/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/dantte-lp/wolfguard/releases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let response = app_for(&mock_server.uri())
            .oneshot(request("/api/activity"))
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["state"], "loaded");
        assert_eq!(json["commits"], serde_json::json!([]));
        assert_eq!(json["releases"], serde_json::json!([]));
    }
}
