//! Configuration management for the Digital Twin Service
//!
//! Parses TOML configuration files and provides typed access to settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Chat model endpoint configuration
///
/// Fields are private to enforce invariants: instances are created via
/// deserialization and checked by `Config::validate()`, after which they
/// cannot be mutated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    base_url: String,
    name: String,
    #[serde(default = "default_temperature")]
    temperature: f64,
    /// Upper bound on a single generation, streaming included
    #[serde(default = "default_request_timeout")]
    request_timeout_seconds: u64,
}

impl ModelConfig {
    /// Get the Ollama base URL (scheme + host + port, no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model name passed to the chat endpoint
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the sampling temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Get the per-request timeout in seconds
    pub fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout() -> u64 {
    300
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Three phases: read the file, parse the TOML, validate the parsed
    /// values. Each phase preserves its own error context.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            crate::error::AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            }
        })?;

        config.validate().map_err(|e| {
            crate::error::AppError::Config(format!(
                "Invalid configuration in '{}': {}",
                path_display, e
            ))
        })?;

        Ok(config)
    }

    /// Validate the parsed configuration
    ///
    /// Checks the model endpoint URL scheme, model name, temperature range,
    /// and timeout bounds. Returns the first violation found.
    pub fn validate(&self) -> crate::error::AppResult<()> {
        if !self.model.base_url.starts_with("http://")
            && !self.model.base_url.starts_with("https://")
        {
            return Err(crate::error::AppError::Config(format!(
                "model.base_url '{}' must start with http:// or https://",
                self.model.base_url
            )));
        }

        if self.model.name.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "model.name must not be empty".to_string(),
            ));
        }

        if !self.model.temperature.is_finite()
            || self.model.temperature < 0.0
            || self.model.temperature > 2.0
        {
            return Err(crate::error::AppError::Config(format!(
                "model.temperature must be a finite number between 0.0 and 2.0, got {}",
                self.model.temperature
            )));
        }

        if self.model.request_timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(
                "model.request_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
