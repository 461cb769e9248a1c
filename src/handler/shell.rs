use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;

use crate::{error::HttpError, service::shell::Page, AppState};

#[derive(Debug, Deserialize)]
pub struct NavigateDto {
    pub page: Page,
}

pub fn shell_handler() -> Router {
    Router::new()
        .route("/", get(get_shell))
        .route("/page", put(navigate))
        .route("/sidebar", post(toggle_sidebar))
}

pub async fn get_shell(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let shell = app_state.shell.lock().await;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "shell": shell.view()
        }
    })))
}

pub async fn navigate(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<NavigateDto>,
) -> Result<impl IntoResponse, HttpError> {
    let mut shell = app_state.shell.lock().await;
    shell.navigate(body.page);

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "shell": shell.view()
        }
    })))
}

pub async fn toggle_sidebar(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let mut shell = app_state.shell.lock().await;
    shell.toggle_sidebar();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "shell": shell.view()
        }
    })))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn navigation_round_trip() {
        let (app, _) = app();

        let (status, body) = send(&app, "GET", "/api/shell", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["shell"]["currentPage"], "dashboard");

        let (status, body) = send(
            &app,
            "PUT",
            "/api/shell/page",
            Some(json!({ "page": "settings" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["shell"]["pageTitle"], "Settings");

        let (_, body) = send(&app, "POST", "/api/shell/sidebar", None).await;
        assert_eq!(body["data"]["shell"]["sidebarOpen"], true);
    }

    #[tokio::test]
    async fn unknown_page_is_rejected() {
        let (app, _) = app();
        let (status, _) = send(
            &app,
            "PUT",
            "/api/shell/page",
            Some(json!({ "page": "reports" })),
        )
        .await;
        assert!(status.is_client_error());
    }
}
