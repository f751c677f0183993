//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `holocron.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values; when several variables set the same field, the later
//! one in [`Config::apply_overrides`] wins.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
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

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
    /// Reject favorites pointing at users, people, or planets that do not exist.
    pub enforce_foreign_keys: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `holocron.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("holocron.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
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

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HOLOCRON_HOST") {
            self.server.host = val;
        }
        for key in ["PORT", "HOLOCRON_PORT"] {
            if let Some(port) = lookup(key).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("HOLOCRON_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        for key in ["DATABASE_URL", "HOLOCRON_DATABASE_URL"] {
            if let Some(val) = lookup(key) {
                self.database.url = val;
            }
        }
        if let Some(flag) =
            lookup("HOLOCRON_ENFORCE_FOREIGN_KEYS").and_then(|val| parse_flag(&val))
        {
            self.database.enforce_foreign_keys = flag;
        }
        for key in ["HOLOCRON_LOG", "RUST_LOG"] {
            if let Some(val) = lookup(key) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.database.url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(format!(
                "database url must start with `sqlite:`, got `{}`",
                self.database.url
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:holocron.db?mode=rwc".to_string(),
            enforce_foreign_keys: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "holocrond=info,holocron=info,tower_http=debug".to_string(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:holocron.db?mode=rwc");
        assert!(!config.database.enforce_foreign_keys);
        assert_eq!(
            config.logging.filter,
            "holocrond=info,holocron=info,tower_http=debug"
        );
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'
            enforce_foreign_keys = true

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert!(config.database.enforce_foreign_keys);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:holocron.db?mode=rwc");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_leave_defaults_without_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[]));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_take_port_from_platform_variable() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "8000")]));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_prefer_holocron_port_over_platform_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "8000"), ("HOLOCRON_PORT", "8001")]));
        assert_eq!(config.server.port, 8001);
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "eighty")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_split_bind_into_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("HOLOCRON_PORT", "8001"),
            ("HOLOCRON_BIND", "127.0.0.1:4000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn should_prefer_holocron_database_url() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("DATABASE_URL", "sqlite:a.db"),
            ("HOLOCRON_DATABASE_URL", "sqlite:b.db"),
        ]));
        assert_eq!(config.database.url, "sqlite:b.db");
    }

    #[test]
    fn should_parse_foreign_key_flag() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("HOLOCRON_ENFORCE_FOREIGN_KEYS", "TRUE")]));
        assert!(config.database.enforce_foreign_keys);

        config.apply_overrides(env(&[("HOLOCRON_ENFORCE_FOREIGN_KEYS", "maybe")]));
        assert!(config.database.enforce_foreign_keys);

        config.apply_overrides(env(&[("HOLOCRON_ENFORCE_FOREIGN_KEYS", "0")]));
        assert!(!config.database.enforce_foreign_keys);
    }

    #[test]
    fn should_prefer_rust_log_over_holocron_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("HOLOCRON_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_sqlite_url() {
        let mut config = Config::default();
        config.database.url = "postgres://localhost/holocron".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sqlite:"));
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
