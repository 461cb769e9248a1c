use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::propertydb::PropertyExt,
    dtos::propertydtos::{PropertyListItemDto, PropertyQueryDto},
    error::HttpError,
    service::error::ServiceError,
    AppState,
};

pub fn properties_handler() -> Router {
    Router::new()
        .route("/", get(get_properties))
        .route("/new", post(open_create_form))
        .route("/:property_id", get(get_property_by_id).delete(delete_property))
        .route("/:property_id/edit", post(open_edit_form))
}

pub async fn get_properties(
    Query(query_params): Query<PropertyQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let matches = app_state
        .db_client
        .search_properties(&query_params.filters())
        .await;
    let total = matches.len();

    let page = query_params.page.unwrap_or(1);
    let rows: Vec<PropertyListItemDto> = match query_params.limit {
        Some(limit) => matches
            .iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .map(PropertyListItemDto::from_property)
            .collect(),
        None => matches.iter().map(PropertyListItemDto::from_property).collect(),
    };

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "properties": rows,
            "pagination": {
                "page": page,
                "limit": query_params.limit,
                "total": total
            }
        }
    })))
}

pub async fn get_property_by_id(
    Path(property_id): Path<i64>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property(property_id)
        .await
        .ok_or(ServiceError::PropertyNotFound(property_id))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": property
        }
    })))
}

pub async fn delete_property(
    Path(property_id): Path<i64>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let removed = app_state
        .db_client
        .remove_property(property_id)
        .await
        .map_err(ServiceError::from)?;

    tracing::info!("🗑️  Deleted property {} ({})", removed.id, removed.title);

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Property deleted successfully",
        "data": {
            "id": removed.id
        }
    })))
}

pub async fn open_create_form(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let mut shell = app_state.shell.lock().await;
    shell.form.open_create();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "form": shell.form.view()
        }
    })))
}

/// The form is only opened for ids that still exist.
pub async fn open_edit_form(
    Path(property_id): Path<i64>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property(property_id)
        .await
        .ok_or(ServiceError::PropertyNotFound(property_id))?;

    let mut shell = app_state.shell.lock().await;
    shell.form.open_edit(property);

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "form": shell.form.view()
        }
    })))
}
