// routes.rs
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        dashboard::dashboard_handler,
        form::form_handler,
        properties::properties_handler,
        settings::settings_handler,
        shell::shell_handler,
    },
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Image uploads arrive as raw bodies; the configured limit is checked in
    // the form service, so the default 2MB body cap must not cut in first.
    let upload_limit = match app_state.env.max_image_size_mb {
        Some(max_mb) => DefaultBodyLimit::max(max_mb.saturating_mul(1024 * 1024).saturating_add(1)),
        None => DefaultBodyLimit::disable(),
    };

    let api_route = Router::new()
        .nest("/shell", shell_handler())
        .nest("/dashboard", dashboard_handler())
        .nest("/properties", properties_handler())
        .nest("/form", form_handler().layer(upload_limit))
        .nest("/settings", settings_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::create_router;
    use crate::{config::Config, AppState};

    pub fn app_with(config: Config) -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(config));
        (create_router(state.clone()), state)
    }

    pub fn app() -> (Router, Arc<AppState>) {
        app_with(Config::default())
    }

    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        into_parts(app.clone().oneshot(request).await.unwrap()).await
    }

    pub async fn send_bytes(
        app: &Router,
        uri: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(bytes))
            .unwrap();
        into_parts(app.clone().oneshot(request).await.unwrap()).await
    }

    async fn into_parts(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_check_responds() {
        let (app, _) = app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (app, _) = app();
        let (status, _) = send(&app, "GET", "/api/nowhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn huge_image_limit_still_builds_router() {
        let (app, _) = app_with(crate::config::Config {
            max_image_size_mb: Some(usize::MAX),
            ..crate::config::Config::default()
        });
        let (status, _) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
