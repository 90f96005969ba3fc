//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines defaults for
//! the bind address, log filter, and log format. `AppConfig` is the root
//! configuration struct containing all settings. The config file is optional:
//! when the default path is absent the built-in defaults apply, so the
//! service runs with no configuration at all.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "vitals=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Bind host, a numeric IP (hostnames are not resolved)
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to built-in defaults when
    /// the default config file is absent. An explicitly-given path must exist.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::load(path)
        } else if path == DEFAULT_CONFIG_PATH {
            Ok(Self::default())
        } else {
            Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {path}"),
            )))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp config");
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[http]
host = "127.0.0.1"
port = 8080

[logging]
format = "json"
"#,
        );
        let config = AppConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file = write_config("[http]\nport = 9090\n");
        let config = AppConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let file = write_config("[http\nport = not-a-port");
        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let result = AppConfig::load_or_default("/nonexistent/vitals.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.logging.format, "text");
    }
}
