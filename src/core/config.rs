//! Loads the client configuration from `~/.prompt-studio/config.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend address used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
/// Model preselected for every action.
pub const DEFAULT_MODEL: &str = "chatgpt";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub library_path: Option<PathBuf>,
    pub default_model: String,
    pub toast_seconds: u64,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            library_path: None,
            default_model: DEFAULT_MODEL.to_string(),
            toast_seconds: 3,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Parses a configuration document. Missing keys fall back to defaults.
pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| format!("Failed to parse config.toml: {}", e))
}

/// Loads `config.toml` from the base directory, or the defaults if it does not exist.
pub fn load_config(base_dir: &Path) -> Result<Config, String> {
    let config_path = base_dir.join("config.toml");
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read config.toml: {}", e))?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse_config(
            r#"
server_url = "http://10.0.0.5:9000"
request_timeout_secs = 30
"#,
        )
        .unwrap();
        assert_eq!(config.server_url, "http://10.0.0.5:9000");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.toast_duration(), Duration::from_secs(3));
    }

    #[test]
    fn malformed_document_is_reported() {
        let err = parse_config("toast_seconds = \"soon\"").unwrap_err();
        assert!(err.starts_with("Failed to parse config.toml"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), Config::default());
    }
}
