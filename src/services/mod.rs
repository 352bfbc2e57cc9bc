// src/services/mod.rs
pub mod gemini;
pub mod relay;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failures of a single generation call, classified by what upstream reported.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API error 400: {message}")]
    InvalidRequest { message: String },

    #[error("Gemini API error 403: {message}")]
    PermissionDenied { message: String },

    #[error("Gemini API error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Gemini request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Empty response from Gemini")]
    EmptyResponse,
}

impl GenerationError {
    /// Classify a non-success upstream status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => GenerationError::InvalidRequest { message },
            403 => GenerationError::PermissionDenied { message },
            _ => GenerationError::Upstream { status, message },
        }
    }
}

/// A text generation backend taking one free-text prompt.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a reply. An empty string is a valid reply at this layer.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    fn model_name(&self) -> &str;
}
