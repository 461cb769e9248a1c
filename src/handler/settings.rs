use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::{
        propertydtos::Response,
        settingsdtos::{AgencySettingsDto, UserSettingsDto},
    },
    error::HttpError,
    service::error::ServiceError,
    AppState,
};

pub fn settings_handler() -> Router {
    Router::new()
        .route("/", get(get_settings))
        .route("/agency", put(save_agency_settings))
        .route("/user", put(save_user_settings))
}

pub async fn get_settings(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let settings = app_state.settings.current().await;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "settings": settings
        }
    })))
}

pub async fn save_agency_settings(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<AgencySettingsDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(ServiceError::from)?;

    let message = app_state.settings.save_agency(body).await;

    Ok(Json(Response {
        status: "success",
        message: message.to_string(),
    }))
}

pub async fn save_user_settings(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UserSettingsDto>,
) -> Result<impl IntoResponse, HttpError> {
    let message = app_state.settings.save_user(body).await;

    Ok(Json(Response {
        status: "success",
        message: message.to_string(),
    }))
}
