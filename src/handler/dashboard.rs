use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{
    db::propertydb::PropertyExt, error::HttpError, service::dashboard_service::summarize, AppState,
};

pub fn dashboard_handler() -> Router {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state.db_client.list_properties().await;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "summary": summarize(&properties)
        }
    })))
}
