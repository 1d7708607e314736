use std::collections::HashMap;
use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5000;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    /// Development mode: lowers the default log level to `debug`.
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from disk and the process environment.
    ///
    /// Sources, lowest precedence first: the TOML file named by
    /// `PINTEREST_CONFIG` (default `config.toml`, skipped when missing),
    /// `PINTEREST_*` variables, then the bare `PORT` variable.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("PINTEREST_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        Self::load_with_env(Path::new(&config_path), env::vars().collect())
    }

    /// Load configuration from `path` (if it exists) layered under the
    /// `PINTEREST_*` and `PORT` entries of `vars`.
    pub fn load_with_env(path: &Path, vars: HashMap<String, String>) -> Result<Self> {
        let port = vars.get("PORT").cloned();

        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PINTEREST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        );

        let settings = builder
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;
        let mut config: Self = settings.try_deserialize()?;

        if let Some(port) = port {
            config
                .apply_port_override(&port)
                .context("invalid PORT environment variable")?;
        }

        Ok(config)
    }

    /// Override the listening port from a raw `PORT` value.
    pub fn apply_port_override(&mut self, raw: &str) -> crate::Result<()> {
        let port = raw.trim().parse::<u16>().map_err(|e| {
            crate::Error::config(format!("PORT must be an integer in 0..=65535, got {raw:?}: {e}"))
        })?;
        self.server.port = port;
        Ok(())
    }

    /// `host:port` pair the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &str {
        match self.logging.level.as_deref().map(str::trim) {
            Some(level) if !level.is_empty() => level,
            _ if self.debug => "debug",
            _ => "info",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    /// Unset means `info`, or `debug` when `AppConfig::debug` is on.
    pub level: Option<String>,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.logging.level, None);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_debug_lowers_default_level() {
        let config = AppConfig {
            debug: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), "debug");

        let explicit = AppConfig {
            debug: true,
            logging: LoggingSection {
                level: Some("warn".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(explicit.log_level(), "warn");

        let blank = AppConfig {
            logging: LoggingSection {
                level: Some("  ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(blank.log_level(), "info");
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override("8080").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_override_rejects_garbage() {
        let mut config = AppConfig::default();
        for raw in ["", "http", "-1", "70000"] {
            let err = config.apply_port_override(raw).unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)), "{raw:?} -> {err}");
        }
        assert_eq!(config.server.port, 5000);
    }
}
