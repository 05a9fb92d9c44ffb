//! Process-wide movie configuration
//!
//! Supplied by the host once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default player width
pub const DEFAULT_WIDTH: &str = "640px";

/// Default player height
pub const DEFAULT_HEIGHT: &str = "360px";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Movie embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieConfig {
    /// Player width when the style override gives none
    pub width: String,
    /// Player height when the style override gives none
    pub height: String,
    /// Splash image path, relative to the site's static assets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<String>,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            splash: None,
        }
    }
}

impl MovieConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded movie config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Set the splash image path
    pub fn with_splash(mut self, splash: impl Into<String>) -> Self {
        self.splash = Some(splash.into());
        self
    }
}
