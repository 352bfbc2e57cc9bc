// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::GenerativeModel;
use crate::services::gemini::GeminiClient;
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

/// Files served next to the chat API.
#[derive(Debug, Clone)]
pub struct Assets {
    pub index_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            index_file: PathBuf::from("index.html"),
            static_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub relay: ChatRelay,
    pub assets: Assets,
}

impl AppState {
    pub fn new(relay: ChatRelay, assets: Assets) -> Self {
        Self { relay, assets }
    }

    /// Build state with a substitutable model, as tests do.
    pub fn with_model(model: Arc<dyn GenerativeModel>, timeout: Duration, assets: Assets) -> Self {
        Self::new(ChatRelay::new(model, timeout), assets)
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let relay = match config.gemini() {
            Some(gemini) => ChatRelay::new(Arc::new(GeminiClient::new(gemini)?), config.request_timeout),
            None => ChatRelay::unconfigured(),
        };
        let assets = Assets {
            index_file: config.index_file.clone(),
            static_dir: config.static_dir.clone(),
        };
        Ok(Self::new(relay, assets))
    }
}
