//! Configuration loading — TOML file with environment variable overrides.
//!
//! Each service looks for `<service>.toml` (e.g. `traffic.toml`) in the
//! working directory. Every field has a sensible default so the file is
//! optional. Environment variables prefixed with the service name
//! (`TRAFFIC_PORT`, `WEATHER_HOST`, ...) take precedence over file values.

use serde::Deserialize;

use mockservices_domain::service::ServiceKind;

/// Port every service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax). Empty means the service default.
    pub filter: String,
}

impl Config {
    /// Load configuration for `service` from `<service>.toml` (if present),
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(service: ServiceKind) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&format!("{service}.toml"))?;
        config.apply_overrides(service, |key| std::env::var(key).ok());
        config.fill_defaults(service);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, service: ServiceKind, lookup: impl Fn(&str) -> Option<String>) {
        let prefix = service.name().to_uppercase();
        let var = |name: &str| lookup(&format!("{prefix}_{name}"));

        if let Some(val) = var("HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn fill_defaults(&mut self, service: ServiceKind) {
        if self.logging.filter.is_empty() {
            self.logging.filter = LoggingConfig::default_filter(service);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl LoggingConfig {
    /// Filter used when neither the file nor the environment sets one.
    #[must_use]
    pub fn default_filter(service: ServiceKind) -> String {
        format!("{service}d=info,mockservices=info,tower_http=debug")
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
