//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
            AppError::Pricing(e) => match e {
                // Setup bug: the season calendar must cover every
                // bookable date. Surfaced so staff see "pricing
                // unavailable" instead of a zero-price booking.
                PricingError::NoSeasonForDate { .. } => {
                    tracing::error!("Pricing configuration error: {}", e);
                    (StatusCode::CONFLICT, "configuration_error")
                }
                PricingError::UnknownGroup { .. } | PricingError::InvalidRequest { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request")
                }
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
