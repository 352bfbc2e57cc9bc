// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorResponse, services::GenerationError};

pub const NOT_CONFIGURED_DETAIL: &str = "Gemini API Key not configured";
pub const INVALID_REQUEST_DETAIL: &str = "Invalid API request (400). Check Key or Request.";
pub const PERMISSION_DENIED_DETAIL: &str = "Invalid API Key or Permission Denied (403).";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Gemini API Key not configured")]
    NotConfigured,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    // Upstream failures all surface as 500, including permission errors.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotConfigured | AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Client-facing detail text.
    pub fn detail(&self) -> String {
        match self {
            AppError::NotConfigured => NOT_CONFIGURED_DETAIL.to_string(),
            AppError::Generation(GenerationError::InvalidRequest { .. }) => {
                INVALID_REQUEST_DETAIL.to_string()
            }
            AppError::Generation(GenerationError::PermissionDenied { .. }) => {
                PERMISSION_DENIED_DETAIL.to_string()
            }
            AppError::Generation(err) => err.to_string(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}
