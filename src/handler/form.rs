use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header::CONTENT_TYPE, HeaderMap},
    response::IntoResponse,
    routing::{get, patch, post, put},
    Extension, Json, Router,
};
use chrono::Utc;

use crate::{
    dtos::propertydtos::{FieldUpdate, ImageSlot, TagToggleDto},
    error::{ErrorMessage, HttpError},
    service::{error::ServiceError, property_form::{encode_image, FormMode}},
    AppState,
};

pub fn form_handler() -> Router {
    Router::new()
        .route("/", get(get_form))
        .route("/field", patch(update_field))
        .route("/tags", post(toggle_tag))
        .route("/images/:slot", put(upload_image).delete(remove_image))
        .route("/submit", post(submit_form))
        .route("/close", post(close_form))
}

fn parse_slot(slot: &str) -> Result<ImageSlot, HttpError> {
    slot.parse::<ImageSlot>()
        .map_err(|_| HttpError::bad_request(ErrorMessage::InvalidImageSlot.to_string()))
}

fn form_response(view: impl serde::Serialize) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "success",
        "data": {
            "form": view
        }
    }))
}

pub async fn get_form(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let shell = app_state.shell.lock().await;
    let view = shell.form.view().ok_or(ServiceError::FormClosed)?;

    Ok(form_response(view))
}

pub async fn update_field(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<FieldUpdate>,
) -> Result<impl IntoResponse, HttpError> {
    let policy = app_state.form_policy();
    let mut shell = app_state.shell.lock().await;
    shell.form.update_field(body, &policy)?;

    Ok(form_response(shell.form.view()))
}

pub async fn toggle_tag(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<TagToggleDto>,
) -> Result<impl IntoResponse, HttpError> {
    let mut shell = app_state.shell.lock().await;
    shell.form.toggle_tag(body.tag, body.checked)?;

    Ok(form_response(shell.form.view()))
}

/// Raw file body; the content type header names the image format.
/// The shell lock is released while the file is encoded.
pub async fn upload_image(
    Path(slot): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let slot = parse_slot(&slot)?;
    let policy = app_state.form_policy();

    let generation = {
        let shell = app_state.shell.lock().await;
        if !shell.form.is_open() {
            return Err(ServiceError::FormClosed.into());
        }
        shell.form.generation()
    };

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let encoded = encode_image(body.to_vec(), content_type, policy.max_image_size_mb).await?;

    let mut shell = app_state.shell.lock().await;
    match encoded {
        Some(data_url) => {
            if !shell.form.set_image(slot, data_url, generation) {
                tracing::debug!("Dropping {:?} upload for a form that was closed", slot);
                return Err(ServiceError::FormClosed.into());
            }
        }
        // no file chosen
        None => tracing::debug!("Empty {:?} upload ignored", slot),
    }

    Ok(form_response(shell.form.view()))
}

pub async fn remove_image(
    Path(slot): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let slot = parse_slot(&slot)?;
    let mut shell = app_state.shell.lock().await;
    shell.form.remove_image(slot)?;

    Ok(form_response(shell.form.view()))
}

pub async fn submit_form(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let policy = app_state.form_policy();
    let mut shell = app_state.shell.lock().await;
    let mode = shell.form.mode();

    let now = Utc::now();
    let property = shell
        .form
        .submit(&app_state.db_client, &policy, now.date_naive(), now.timestamp_millis())
        .await?;

    let message = match mode {
        FormMode::Create => "Property created successfully",
        FormMode::Edit => "Property updated successfully",
    };
    tracing::info!("✅ {} (id {})", message, property.id);

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": message,
        "data": {
            "property": property
        }
    })))
}

pub async fn close_form(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let mut shell = app_state.shell.lock().await;
    shell.form.close();

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Form closed"
    })))
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, NumericParsePolicy},
        db::propertydb::PropertyExt,
        routes::test_support::*,
    };
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    async fn fill_studio(app: &axum::Router) {
        for (field, value) in [
            ("title", json!("Studio Center")),
            ("location", json!("Tunis")),
            ("price", json!("80000")),
            ("type", json!("Apartment")),
            ("status", json!("ForSale")),
            ("sqft", json!("45")),
        ] {
            let (status, _) = send(
                app,
                "PATCH",
                "/api/form/field",
                Some(json!({ "field": field, "value": value })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = send_bytes(
            app,
            "/api/form/images/image",
            "image/png",
            PNG_HEADER.to_vec(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["form"]["draft"]["image"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn create_flow_appends_and_closes() {
        let (app, state) = app();

        let (status, _) = send(&app, "GET", "/api/form", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        send(&app, "POST", "/api/properties/new", None).await;
        fill_studio(&app).await;

        let (status, body) = send(&app, "POST", "/api/form/submit", None).await;
        assert_eq!(status, StatusCode::OK);
        let property = &body["data"]["property"];
        assert_eq!(property["title"], "Studio Center");
        assert_eq!(property["isRental"], false);
        assert_eq!(property["beds"], serde_json::Value::Null);
        assert_eq!(property["tags"], json!([]));
        assert_eq!(property["dateAdded"], Utc::now().date_naive().to_string());

        let listed = state.db_client.list_properties().await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2].title, "Studio Center");
        assert!(listed.iter().filter(|p| p.id == listed[2].id).count() == 1);

        let (status, _) = send(&app, "GET", "/api/form", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn edit_flow_switches_to_rental() {
        let (app, state) = app();

        send(&app, "POST", "/api/properties/1/edit", None).await;
        send(
            &app,
            "PATCH",
            "/api/form/field",
            Some(json!({ "field": "status", "value": "ForRent" })),
        )
        .await;
        let (status, body) = send(&app, "POST", "/api/form/submit", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Property updated successfully");
        assert_eq!(body["data"]["property"]["id"], 1);
        assert_eq!(body["data"]["property"]["dateAdded"], "2024-06-13");
        assert_eq!(body["data"]["property"]["isRental"], true);
        assert_eq!(state.db_client.list_properties().await[0].id, 1);
    }

    #[tokio::test]
    async fn tags_toggle_through_the_api() {
        let (app, _) = app();
        send(&app, "POST", "/api/properties/new", None).await;

        send(
            &app,
            "POST",
            "/api/form/tags",
            Some(json!({ "tag": "Premium", "checked": true })),
        )
        .await;
        let (_, body) = send(
            &app,
            "POST",
            "/api/form/tags",
            Some(json!({ "tag": "Trending", "checked": true })),
        )
        .await;
        assert_eq!(body["data"]["form"]["draft"]["tags"], json!(["Premium", "Trending"]));

        let (_, body) = send(
            &app,
            "POST",
            "/api/form/tags",
            Some(json!({ "tag": "Trending", "checked": false })),
        )
        .await;
        assert_eq!(body["data"]["form"]["draft"]["tags"], json!(["Premium"]));
    }

    #[tokio::test]
    async fn non_numeric_area_reports_field_error() {
        let (app, state) = app();
        send(&app, "POST", "/api/properties/new", None).await;
        fill_studio(&app).await;
        send(
            &app,
            "PATCH",
            "/api/form/field",
            Some(json!({ "field": "sqft", "value": "abc" })),
        )
        .await;

        let (status, body) = send(&app, "POST", "/api/form/submit", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["sqft"].is_array());
        assert_eq!(state.db_client.property_count().await, 2);

        let (status, _) = send(&app, "GET", "/api/form", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn lenient_area_is_stored_as_null() {
        let (app, _) = app_with(Config {
            numeric_parse_policy: NumericParsePolicy::Lenient,
            ..Config::default()
        });
        send(&app, "POST", "/api/properties/new", None).await;
        fill_studio(&app).await;
        send(
            &app,
            "PATCH",
            "/api/form/field",
            Some(json!({ "field": "sqft", "value": "abc" })),
        )
        .await;

        let (status, body) = send(&app, "POST", "/api/form/submit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["property"]["sqft"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn image_upload_edge_cases() {
        let (app, _) = app_with(Config {
            max_image_size_mb: Some(1),
            ..Config::default()
        });

        let (status, _) = send_bytes(
            &app,
            "/api/form/images/image",
            "image/png",
            PNG_HEADER.to_vec(),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        send(&app, "POST", "/api/properties/new", None).await;

        let (status, body) = send_bytes(
            &app,
            "/api/form/images/plan",
            "image/png",
            Vec::new(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["form"]["draft"]["planImage"], "");

        let (status, _) = send_bytes(
            &app,
            "/api/form/images/plan",
            "text/plain",
            b"hello".to_vec(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send_bytes(
            &app,
            "/api/form/images/plan",
            "image/png",
            vec![0u8; 1024 * 1024 + 1],
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

        let (status, _) = send_bytes(
            &app,
            "/api/form/images/cover",
            "image/png",
            PNG_HEADER.to_vec(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        send_bytes(&app, "/api/form/images/plan", "image/png", PNG_HEADER.to_vec()).await;
        let (status, body) = send(&app, "DELETE", "/api/form/images/plan", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["form"]["draft"]["planImage"], "");
    }

    #[tokio::test]
    async fn close_discards_draft() {
        let (app, state) = app();
        send(&app, "POST", "/api/properties/2/edit", None).await;
        send(
            &app,
            "PATCH",
            "/api/form/field",
            Some(json!({ "field": "title", "value": "Changed" })),
        )
        .await;

        let (status, _) = send(&app, "POST", "/api/form/close", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!state.shell.lock().await.form.is_open());
        assert_eq!(
            state.db_client.get_property(2).await.unwrap().title,
            "Traditional Cuisine Restaurant"
        );

        let (status, _) = send(&app, "POST", "/api/form/submit", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
