//! Runtime configuration.
//!
//! Precedence: command-line flags, then environment, then defaults.

use std::path::PathBuf;

use crate::cli::CliOverrides;
use crate::error::ConfigError;
use crate::loader::DEFAULT_ENDPOINT;
use crate::view_state::Theme;

/// Environment variable overriding the endpoint.
pub const ENV_URL: &str = "POSTBOARD_URL";
/// Environment variable selecting the initial theme.
pub const ENV_THEME: &str = "POSTBOARD_THEME";
/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "POSTBOARD_LOG";
/// Environment variable holding the log file path.
pub const ENV_LOG_FILE: &str = "POSTBOARD_LOG_FILE";

/// Configuration for a postboard session.
///
/// # Example
///
/// ```ignore
/// use postboard::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_endpoint("http://localhost:8080/posts")
///     .with_theme(Theme::Dark);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL serving the post list
    pub endpoint: String,
    /// Theme shown on startup (not persisted)
    pub theme: Theme,
    /// `EnvFilter` directive string
    pub log_filter: String,
    /// Where logs go; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: Theme::default(),
            log_filter: "info".to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.is_empty()) {
            config = config.with_endpoint(url);
        }
        if let Some(theme) = lookup(ENV_THEME).filter(|v| !v.is_empty()) {
            config = config.with_theme(theme.parse()?);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
            config = config.with_log_file(Some(PathBuf::from(path)));
        }

        Ok(config)
    }

    /// Layer command-line overrides on top.
    pub fn apply_overrides(mut self, overrides: CliOverrides) -> Self {
        if let Some(url) = overrides.url {
            self.endpoint = url;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(level) = overrides.log_level {
            self.log_filter = level;
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        self
    }

    /// Check that the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason,
        };

        let url = url::Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}

/// `<data_local_dir>/postboard/postboard.log`, if a data dir exists.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("postboard").join("postboard.log"))
}
