//! Configuration tests
//!
//! The generated template must always parse back, and every key it writes must
//! land in the matching `Config` field.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the default template parses and resolves to the defaults
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), no_env);
    let defaults = Config::default();
    assert_eq!(config.api_url, defaults.api_url);
    assert_eq!(config.request_timeout_secs, defaults.request_timeout_secs);
    assert_eq!(config.loading_interval_ms, defaults.loading_interval_ms);
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

/// Every customised value survives serialization
#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "http://localhost:8000".to_string();
    config.request_timeout_secs = 0;
    config.loading_interval_ms = 250;
    config.toast_duration_ms = 5000;
    config.theme = "Nord".to_string();
    config.demo_latency_ms = 10;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("/tmp/askme logs");
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "chat".to_string();

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let back = Config::resolve(file, no_env);

    assert_eq!(back.api_url, "http://localhost:8000");
    assert_eq!(back.request_timeout_secs, 0);
    assert_eq!(back.loading_interval_ms, 250);
    assert_eq!(back.toast_duration_ms, 5000);
    assert_eq!(back.theme, "Nord");
    assert_eq!(back.demo_latency_ms, 10);
    assert_eq!(back.logging.level, "debug");
    assert!(back.logging.file_enabled);
    assert_eq!(back.logging.file_dir, PathBuf::from("/tmp/askme logs"));
    assert_eq!(back.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(back.logging.file_prefix, "chat");
}

/// Quotes, backslashes and control characters are escaped as TOML, not Rust
#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.api_url = "http://x/\u{1b}\t\"q\"".to_string();
    config.logging.file_dir = PathBuf::from("C:\\logs\\askme");
    config.logging.file_prefix = "chat\nlog".to_string();

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let back = Config::resolve(file, no_env);

    assert_eq!(back.api_url, "http://x/\u{1b}\t\"q\"");
    assert_eq!(back.logging.file_dir, PathBuf::from("C:\\logs\\askme"));
    assert_eq!(back.logging.file_prefix, "chat\nlog");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://from-file"
theme = "Light"
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("ASKME_API_URL", "http://from-env"),
        ("ASKME_TIMEOUT_SECS", "5"),
        ("ASKME_DEMO", "true"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.api_url, "http://from-env");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.theme, "Light"); // no env override
    assert!(config.demo_mode);
}

#[test]
fn test_bad_env_number_falls_back_to_file() {
    let file = Config::parse_file_config("request_timeout_secs = 30").unwrap();
    let config = Config::resolve(file, env_from(&[("ASKME_TIMEOUT_SECS", "soon")]));
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_demo_flag_values() {
    for (value, expected) in [("1", true), ("TRUE", true), ("0", false), ("no", false)] {
        let config = Config::resolve(FileConfig::default(), env_from(&[("ASKME_DEMO", value)]));
        assert_eq!(config.demo_mode, expected, "ASKME_DEMO={}", value);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(Config::parse_file_config("api_ulr = \"typo\"").is_err());
    assert!(Config::parse_file_config("[logging]\nlevle = \"debug\"").is_err());
}

#[test]
fn test_wrong_types_are_rejected() {
    assert!(Config::parse_file_config("request_timeout_secs = \"ten\"").is_err());
}

#[test]
fn test_rotation_parsing() {
    let file = Config::parse_file_config("[logging]\nfile_rotation = \"never\"").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);

    assert!(Config::parse_file_config("[logging]\nfile_rotation = \"weekly\"").is_err());
}

#[test]
fn test_partial_logging_section_keeps_defaults() {
    let file = Config::parse_file_config("[logging]\nlevel = \"debug\"").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.filter_directive(), "askme=debug");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_prefix, "askme");
}

#[test]
fn test_zero_loading_interval_is_clamped() {
    let config = Config {
        loading_interval_ms: 0,
        ..Config::default()
    };
    assert_eq!(config.loading_interval(), std::time::Duration::from_millis(1));
}
