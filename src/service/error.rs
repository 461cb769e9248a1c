use axum::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    db::propertydb::StoreError,
    error::{ErrorMessage, HttpError},
    utils::image_utils::ImageError,
};

/// Why a draft could not be turned into a property.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Missing required fields: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Field '{field}' must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Price must be a non-negative amount, got '{0}'")]
    InvalidPrice(String),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Property {0} not found")]
    PropertyNotFound(i64),

    #[error("The property form is not open")]
    FormClosed,

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Other error: {0}")]
    Other(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::PropertyNotFound(_)
            | ServiceError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,

            ServiceError::FormClosed
            | ServiceError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,

            ServiceError::Image(ImageError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,

            ServiceError::Draft(_)
            | ServiceError::Image(ImageError::Unsupported(_))
            | ServiceError::Validation(_)
            | ServiceError::Store(StoreError::IdMismatch { .. }) => StatusCode::BAD_REQUEST,

            ServiceError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        let status = error.status_code();
        let message = match &error {
            ServiceError::PropertyNotFound(_) | ServiceError::Store(StoreError::NotFound(_)) => {
                ErrorMessage::PropertyNotFound.to_string()
            }
            ServiceError::FormClosed => ErrorMessage::FormClosed.to_string(),
            ServiceError::Image(ImageError::TooLarge { .. }) => {
                ErrorMessage::ImageTooLarge.to_string()
            }
            ServiceError::Image(ImageError::Unsupported(_)) => {
                ErrorMessage::UnsupportedImage.to_string()
            }
            ServiceError::Other(_) => ErrorMessage::ServerError.to_string(),
            other => other.to_string(),
        };

        let details = match &error {
            ServiceError::Draft(DraftError::Validation(errors))
            | ServiceError::Validation(errors) => {
                serde_json::to_value(errors.field_errors()).ok()
            }
            ServiceError::Draft(DraftError::InvalidNumber { field, value }) => {
                let mut details = serde_json::Map::new();
                details.insert(
                    field.to_string(),
                    serde_json::json!([format!("'{}' is not a whole number", value)]),
                );
                Some(serde_json::Value::Object(details))
            }
            ServiceError::Draft(DraftError::InvalidPrice(value)) => {
                Some(serde_json::json!({ "price": [format!("'{}' is not a valid amount", value)] }))
            }
            _ => None,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", error);
        }

        let http_error = HttpError::new(message, status);
        match details {
            Some(details) => http_error.with_errors(details),
            None => http_error,
        }
    }
}
