// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use thiserror::Error;

use crate::services::gemini::GeminiConfig;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GEMINI_API_KEY` is unset or blank.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub index_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let timeout_raw = get("GEMINI_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string());
        let timeout_secs: u64 = timeout_raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::Invalid {
                key: "GEMINI_TIMEOUT_SECS",
                value: timeout_raw.clone(),
                reason: e.to_string(),
            }
        })?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "GEMINI_TIMEOUT_SECS",
                value: timeout_raw,
                reason: "must be at least 1".to_string(),
            });
        }

        let bind_raw = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = bind_raw.trim().parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: get("GEMINI_API_BASE", DEFAULT_API_BASE),
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            index_file: PathBuf::from(get("INDEX_FILE", "index.html")),
            static_dir: PathBuf::from(get("STATIC_DIR", ".")),
        })
    }

    /// Gemini client settings, if a key is configured.
    pub fn gemini(&self) -> Option<GeminiConfig> {
        self.api_key.as_ref().map(|api_key| GeminiConfig {
            api_key: api_key.clone(),
            model: self.model.clone(),
            api_base: self.api_base.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert!(config.api_key.is_none());
        assert!(config.gemini().is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.index_file, PathBuf::from("index.html"));
        assert_eq!(config.static_dir, PathBuf::from("."));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = load(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_TIMEOUT_SECS", "5"),
            ("BIND_ADDR", "127.0.0.1:8000"),
            ("STATIC_DIR", "public"),
        ])
        .unwrap();
        let gemini = config.gemini().unwrap();
        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            load(&[("GEMINI_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::Invalid { key: "GEMINI_TIMEOUT_SECS", .. })
        ));
        assert!(load(&[("GEMINI_TIMEOUT_SECS", "0")]).is_err());
        assert!(matches!(
            load(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }
}
