//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registration endpoint server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty means permissive.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Registration client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the registration endpoint host (e.g., "http://localhost:3000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_register_path")]
    pub register_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_register_path() -> String {
    "/api/register".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            register_path: default_register_path(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Client config pointed at the given base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the registration endpoint
    pub fn register_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.register_path.trim_start_matches('/')
        )
    }
}

/// Navigation targets used by the registration flow
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// Pushed after a successful registration
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Replaced to when the session is already authenticated
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

fn default_login_path() -> String {
    "/Login".to_string()
}

fn default_dashboard_path() -> String {
    "/Dashboard".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            dashboard_path: default_dashboard_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("SIGNUP_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = lookup("SIGNUP_LOG_FORMAT") {
            self.format = format;
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Candidate config files, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("signup").join("config.toml")),
            Some(PathBuf::from("/etc/signup/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first readable file among `paths`, falling back to defaults
    /// plus environment. Nothing is logged; call [`ConfigSource::log`] once
    /// the subscriber is installed, since the subscriber itself is configured
    /// from the result.
    pub fn resolve(paths: &[PathBuf]) -> (Self, ConfigSource) {
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    let source = ConfigSource {
                        path: Some(path.clone()),
                        failures,
                    };
                    return (config, source);
                }
                Err(e) => failures.push(e),
            }
        }

        (Self::from_env(), ConfigSource { path: None, failures })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("SIGNUP_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SIGNUP_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Some(url) = lookup("SIGNUP_BASE_URL") {
            self.client.base_url = url;
        }

        self.logging.apply_overrides(lookup);
    }
}

/// Where [`Config::resolve`] found its settings
#[derive(Debug)]
pub struct ConfigSource {
    /// File that was loaded; `None` means defaults plus environment
    pub path: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl ConfigSource {
    pub fn log(&self) {
        for e in &self.failures {
            tracing::warn!("Skipped config file: {}", e);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Signup Configuration
#
# Environment variables override these settings:
# - SIGNUP_API_HOST
# - SIGNUP_API_PORT
# - SIGNUP_BASE_URL
# - SIGNUP_LOG_LEVEL
# - SIGNUP_LOG_FORMAT

[api]
# Registration endpoint server host
host = "0.0.0.0"

# Registration endpoint server port
port = 3000

# Allowed CORS origins (empty = allow any)
cors_origins = []

[client]
# Where the registration form submits to
base_url = "http://localhost:3000"
register_path = "/api/register"

# Request timeout in milliseconds
request_timeout_ms = 10000

[routes]
# Pushed after a successful registration
login_path = "/Login"

# Replaced to when the user is already signed in
dashboard_path = "/Dashboard"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.addr(), "0.0.0.0:3000");
        assert_eq!(config.client.register_url(), "http://localhost:3000/api/register");
        assert_eq!(config.routes.login_path, "/Login");
        assert_eq!(config.routes.dashboard_path, "/Dashboard");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 3000);
        assert!(config.api.cors_origins.is_empty());
        assert_eq!(config.client.request_timeout_ms, 10_000);
        assert_eq!(config.routes.login_path, "/Login");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nbase_url = \"http://example.test/\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client.register_url(), "http://example.test/api/register");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.routes.dashboard_path, "/Dashboard");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SIGNUP_API_PORT", "8443"),
            ("SIGNUP_BASE_URL", "https://accounts.example.test"),
            ("SIGNUP_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 8443);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.client.base_url, "https://accounts.example.test");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "SIGNUP_API_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_resolve_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[logging\nlevel = ").unwrap();
        std::fs::write(&good, "[logging]\nformat = \"json\"\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let (config, source) = Config::resolve(&[missing, broken, good.clone()]);
        assert_eq!(source.path, Some(good));
        assert_eq!(source.failures.len(), 1);
        assert!(matches!(source.failures[0], ConfigError::Parse { .. }));
        // Logging settings are available before anything has been logged
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_resolve_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = Config::resolve(&[dir.path().join("none.toml")]);
        assert!(source.path.is_none());
        assert!(source.failures.is_empty());
        assert_eq!(config.routes.login_path, "/Login");
    }

    #[test]
    fn test_logging_overrides_without_a_file() {
        let mut logging = LoggingConfig::default();
        logging.apply_overrides(|key| match key {
            "SIGNUP_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "pretty");
    }
}
