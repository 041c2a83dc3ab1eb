//! Configuration for the chat client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/askme/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hosted question-answering API
pub const DEFAULT_API_URL: &str = "https://test-production-d202.up.railway.app";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the question-answering API
    pub api_url: String,

    /// Per-request timeout in seconds (0 = wait forever)
    pub request_timeout_secs: u64,

    /// How often the loading message advances while an answer is pending
    pub loading_interval_ms: u64,

    /// How long notifications stay on screen
    pub toast_duration_ms: u64,

    /// Theme name: "Dark", "Light", "Nord"
    pub theme: String,

    /// Demo mode: talk to an in-process mock backend instead of `api_url`
    pub demo_mode: bool,

    /// Simulated answer latency of the demo backend
    pub demo_latency_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 120,
            loading_interval_ms: 1000,
            toast_duration_ms: 3000,
            theme: "Dark".to_string(),
            demo_mode: false,
            demo_latency_ms: 2500,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn loading_interval(&self) -> Duration {
        // Zero would make tokio's interval panic
        Duration::from_millis(self.loading_interval_ms.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn demo_latency(&self) -> Duration {
        Duration::from_millis(self.demo_latency_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub loading_interval_ms: Option<u64>,
    pub toast_duration_ms: Option<u64>,
    pub theme: Option<String>,
    pub demo_latency_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a boolean-ish env flag ("1" / "true")
fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Get the config file path: ~/.config/askme/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("askme").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse the config file. A missing file means defaults; a file that
    /// exists but does not parse is an error (no silent fallback).
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).with_context(|| {
                format!(
                    "Failed to parse {} (check quotes, true/false values and section names; \
                     `askme config --reset` restores defaults)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file values and environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("ASKME_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Timeout: env > file > default (unparseable env values are ignored)
        let request_timeout_secs = env("ASKME_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(defaults.request_timeout_secs);

        // Theme: env > file > default
        let theme = env("ASKME_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("ASKME_DEMO").map(|v| env_flag(&v)).unwrap_or(false);

        Self {
            api_url,
            request_timeout_secs,
            loading_interval_ms: file
                .loading_interval_ms
                .unwrap_or(defaults.loading_interval_ms),
            toast_duration_ms: file
                .toast_duration_ms
                .unwrap_or(defaults.toast_duration_ms),
            theme,
            demo_mode,
            demo_latency_ms: file.demo_latency_ms.unwrap_or(defaults.demo_latency_ms),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
