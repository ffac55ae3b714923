use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;
use crate::timezone::TimezoneError;

#[derive(Debug)]
pub enum AppError {
    MissingUserId,
    InvalidUserId,
    InvalidTimezone(String),
    Store(StoreError),
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable reason naming the offending input.
    pub detail: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUserId
            | AppError::InvalidUserId
            | AppError::InvalidTimezone(_)
            | AppError::Store(StoreError::EmptyUserId) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::MissingUserId | AppError::Store(StoreError::EmptyUserId) => {
                "X-User-Id header is required and cannot be empty.".to_string()
            }
            AppError::InvalidUserId => {
                "X-User-Id header must be visible ASCII text.".to_string()
            }
            AppError::InvalidTimezone(name) => format!(
                "Invalid timezone: '{name}'. Use IANA format (e.g., America/New_York, Europe/London)."
            ),
            AppError::Store(StoreError::Unavailable(_)) => {
                "Visit store is unavailable. Try again later.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(StoreError::Unavailable(e)) = &self {
            tracing::error!("Store error: {e}");
        }

        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<TimezoneError> for AppError {
    fn from(e: TimezoneError) -> Self {
        match e {
            TimezoneError::InvalidTimezone(name) => AppError::InvalidTimezone(name),
        }
    }
}
