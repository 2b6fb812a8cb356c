//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines the
//! defaults for the HTTP listener, TLS mode, shutdown window and logging.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Liveness answers must always reflect the running process, never a cache.
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Crate name used as the log target prefix
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", CRATE_NAME);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8305;

/// Default graceful shutdown window in seconds
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

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
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Seconds to wait for open connections after SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
            tls: TlsConfig::default(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Parse `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// How the listener terminates TLS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, for development or behind a TLS-terminating proxy
    #[default]
    None,
    /// PEM certificate and key files supplied by the operator
    Manual,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
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

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }

        if self.http.tls.mode == TlsMode::Manual
            && (self.http.tls.cert_path.is_none() || self.http.tls.key_path.is_none())
        {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected \"text\" or \"json\"",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
