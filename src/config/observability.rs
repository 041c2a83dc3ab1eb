//! Logging configuration: filter level, optional JSON log files

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{self, RollingFileAppender};

/// How often a new log file is started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single file, appended forever
    Never,
}

impl LogRotation {
    /// Name as written in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Resolved `[logging]` section
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for askme's own targets: trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON lines to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix ("askme" -> "askme.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "askme".to_string(),
        }
    }
}

/// `[logging]` as written in the config file; every key optional
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<LogRotation>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Overlay whatever the file sets onto the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let mut config = Self::default();
        let Some(file) = file else {
            return config;
        };

        if let Some(level) = file.level {
            config.level = level;
        }
        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            config.file_dir = dir;
        }
        if let Some(rotation) = file.file_rotation {
            config.file_rotation = rotation;
        }
        if let Some(prefix) = file.file_prefix {
            config.file_prefix = prefix;
        }
        config
    }

    /// Default `EnvFilter` directive when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("askme={}", self.level)
    }

    /// File appender for the configured directory, prefix and rotation
    pub fn rolling_appender(&self) -> RollingFileAppender {
        let (dir, prefix) = (&self.file_dir, &self.file_prefix);
        match self.file_rotation {
            LogRotation::Hourly => rolling::hourly(dir, prefix),
            LogRotation::Daily => rolling::daily(dir, prefix),
            LogRotation::Never => rolling::never(dir, prefix),
        }
    }
}
