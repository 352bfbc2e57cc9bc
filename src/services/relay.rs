// src/services/relay.rs
use std::{fmt::Debug, sync::Arc, time::Duration};

use super::{GenerationError, GenerativeModel};
use crate::error::AppError;

/// Forwards one message to the configured model and normalizes the outcome.
#[derive(Clone)]
pub struct ChatRelay {
    model: Option<Arc<dyn GenerativeModel>>,
    timeout: Duration,
}

impl Debug for ChatRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRelay")
            .field("model", &self.model.as_ref().map(|m| m.model_name()))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ChatRelay {
    pub fn new(model: Arc<dyn GenerativeModel>, timeout: Duration) -> Self {
        Self { model: Some(model), timeout }
    }

    /// A relay with no credential; every call fails without touching upstream.
    pub fn unconfigured() -> Self {
        Self { model: None, timeout: Duration::ZERO }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    pub async fn respond(&self, message: &str) -> Result<String, AppError> {
        let Some(model) = &self.model else {
            tracing::error!("Gemini API Key not configured");
            return Err(AppError::NotConfigured);
        };

        match self.generate(model.as_ref(), message).await {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::error!(error = ?err, model = model.model_name(), "Error calling Gemini: {}", err);
                Err(AppError::Generation(err))
            }
        }
    }

    async fn generate(
        &self,
        model: &dyn GenerativeModel,
        message: &str,
    ) -> Result<String, GenerationError> {
        let text = tokio::time::timeout(self.timeout, model.generate(message))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))??;

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
