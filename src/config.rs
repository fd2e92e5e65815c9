// ABOUTME: Configuration loading for rdsp-chat.
// ABOUTME: Reads ~/.rdsp-chat/config.toml, then applies environment and CLI overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::i18n::Language;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "RDSP_CHAT_ENDPOINT";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the questions are POSTed to.
    pub endpoint: String,
    /// Language shown at startup.
    pub language: Language,
    /// Optional whole-request timeout; unset means the platform default.
    pub request_timeout_secs: Option<u64>,
    /// Log filter used when RUST_LOG is not set.
    pub log_level: String,
    /// Diagnostic log file; defaults to ~/.rdsp-chat/rdsp-chat.log.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api/chat".to_string(),
            language: Language::Fr,
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub language: Option<Language>,
}

impl Config {
    /// Load config from ~/.rdsp-chat/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Apply environment then CLI overrides. CLI wins over environment.
    pub fn apply_overrides(&mut self, env_endpoint: Option<String>, cli: Overrides) {
        if let Some(endpoint) = env_endpoint.filter(|s| !s.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(endpoint) = cli.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(language) = cli.language {
            self.language = language;
        }
    }

    /// Parse and check the endpoint URL.
    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.endpoint.trim())
            .map_err(|e| anyhow::anyhow!("Invalid endpoint '{}': {}", self.endpoint, e))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => anyhow::bail!(
                "Unsupported endpoint scheme '{}' in '{}'. Expected: http, https",
                other,
                self.endpoint
            ),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Directory holding the config and log files.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rdsp-chat")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Path to the diagnostic log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("rdsp-chat.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:8000/api/chat");
        assert_eq!(config.language, Language::Fr);
        assert!(config.request_timeout().is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
endpoint = "https://example.org/api/chat"
language = "en"
request_timeout_secs = 30
log_level = "debug"
log_file = "/tmp/rdsp.log"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint, "https://example.org/api/chat");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_path(), PathBuf::from("/tmp/rdsp.log"));
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let config: Config = toml::from_str(r#"language = "en""#).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.endpoint, "http://localhost:8000/api/chat");
        assert!(config.log_path().ends_with("rdsp-chat.log"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config.language, Language::Fr);
    }

    #[test]
    fn load_from_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "endpoint = \"http://10.0.0.2:9000/api/chat\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.2:9000/api/chat");
    }

    #[test]
    fn invalid_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "language = \"de\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn cli_overrides_env_overrides_file() {
        let mut config = Config::default();
        config.apply_overrides(
            Some("http://env.example/api/chat".to_string()),
            Overrides::default(),
        );
        assert_eq!(config.endpoint, "http://env.example/api/chat");

        config.apply_overrides(
            Some("http://env.example/api/chat".to_string()),
            Overrides {
                endpoint: Some("http://cli.example/api/chat".to_string()),
                language: Some(Language::En),
            },
        );
        assert_eq!(config.endpoint, "http://cli.example/api/chat");
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn blank_env_endpoint_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".to_string()), Overrides::default());
        assert_eq!(config.endpoint, "http://localhost:8000/api/chat");
    }

    #[test]
    fn endpoint_url_validation() {
        let mut config = Config::default();
        assert_eq!(config.endpoint_url().unwrap().path(), "/api/chat");

        config.endpoint = "not a url".to_string();
        assert!(config.endpoint_url().is_err());

        config.endpoint = "ftp://example.org/chat".to_string();
        let err = config.endpoint_url().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }
}
