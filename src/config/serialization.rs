//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let logging = &self.logging;
        format!(
            r#"# askme configuration
#
# Environment variables override these values:
#   ASKME_API_URL, ASKME_TIMEOUT_SECS, ASKME_THEME, ASKME_DEMO=1

# Base URL of the question-answering API
api_url = {api_url}

# Per-request timeout in seconds (0 = wait forever)
request_timeout_secs = {timeout}

# How often the "thinking" message changes while an answer is pending
loading_interval_ms = {loading}

# How long notifications stay on screen
toast_duration_ms = {toast}

# Theme: "Dark", "Light", "Nord"
theme = {theme}

# Answer delay of the demo backend (askme --demo)
demo_latency_ms = {demo}

[logging]
# trace, debug, info, warn, error (RUST_LOG takes precedence)
level = {level}
# Also write JSON logs to files
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = {rotation}
file_prefix = {prefix}
"#,
            api_url = quoted(&self.api_url),
            timeout = self.request_timeout_secs,
            loading = self.loading_interval_ms,
            toast = self.toast_duration_ms,
            theme = quoted(&self.theme),
            demo = self.demo_latency_ms,
            level = quoted(&logging.level),
            file_enabled = logging.file_enabled,
            file_dir = quoted(&logging.file_dir.display().to_string()),
            rotation = quoted(logging.file_rotation.as_str()),
            prefix = quoted(&logging.file_prefix),
        )
    }
}

/// TOML basic string, escaped by the toml crate
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
