// src/config.rs

use crate::logging::{default_data_dir, project_dirs};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "https://zerointel.io/api/user/auth/login";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("login endpoint must be an absolute http(s) URL, got {0}")]
    InvalidEndpoint(Url),
}

/// Runtime settings. Every field may be overridden from `config.toml` in the
/// per-user config directory; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub login_endpoint: Url,
    /// Where the session entry (and the log file) live.
    pub data_dir: PathBuf,
    /// Key of the persisted session entry.
    pub session_key: String,
    pub tick_rate_ms: u64,
    /// `None` leaves the HTTP client's own default in place.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // The constant is a valid absolute URL.
            login_endpoint: Url::parse(DEFAULT_LOGIN_ENDPOINT).unwrap(),
            data_dir: default_data_dir(),
            session_key: "user".to_string(),
            tick_rate_ms: 100,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Defaults, overlaid with the user's config file when one exists.
    /// Also returns the path of the file that was read, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_from(path),
            None => Ok((Self::default(), None)),
        }
    }

    fn load_from(path: PathBuf) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if path.exists() {
            Ok((Self::from_file(&path)?, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.login_endpoint.scheme() {
            "http" | "https" if self.login_endpoint.has_host() => Ok(()),
            _ => Err(ConfigError::InvalidEndpoint(self.login_endpoint.clone())),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_toml_str(
            r#"
            login_endpoint = "http://localhost:8080/login"
            request_timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.login_endpoint.as_str(), "http://localhost:8080/login");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.session_key, "user");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = Config::from_toml_str(r#"login_endpoint = "ftp://example.com/login""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::from_toml_str("tick_rate_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "session_key = \"operator\"\ntick_rate_ms = 250\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.session_key, "operator");
        assert_eq!(config.tick_rate(), Duration::from_millis(250));

        let (loaded, source) = Config::load_from(path.clone()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(source, Some(path));
        let (fallback, source) = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(fallback, Config::default());
        assert_eq!(source, None);

        let missing = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }
}
