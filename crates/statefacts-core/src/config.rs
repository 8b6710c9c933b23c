//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `statefacts-config.yaml` at the
//! project root. Every field has a default, so an empty or missing file
//! yields a runnable configuration backed by a local Dragonfly instance.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid value {value:?} for {var}")]
    InvalidOverride {
        /// Name of the environment variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `statefacts-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Where the reference dataset is loaded from.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Fact store backend selection.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `HOST` / `PORT` override `server.host` / `server.port`
    /// - `STATES_DATASET` overrides `dataset.path`
    /// - `FACT_STORE` overrides `store.backend` (`dragonfly` or `memory`)
    /// - `DRAGONFLY_URL` overrides `store.dragonfly_url`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a bad environment value.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a bad environment value.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse YAML without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override values from an environment lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `PORT` is not a valid
    /// port number or `FACT_STORE` names an unknown backend.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PORT") {
            self.server.port = val.parse().map_err(|e| ConfigError::InvalidOverride {
                var: "PORT",
                value: format!("{val} ({e})"),
            })?;
        }
        if let Some(val) = lookup("STATES_DATASET") {
            self.dataset.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("FACT_STORE") {
            self.store.backend = match val.as_str() {
                "dragonfly" => StoreBackend::Dragonfly,
                "memory" => StoreBackend::Memory,
                _ => {
                    return Err(ConfigError::InvalidOverride {
                        var: "FACT_STORE",
                        value: val,
                    });
                }
            };
        }
        if let Some(val) = lookup("DRAGONFLY_URL") {
            self.store.dragonfly_url = val;
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Reference dataset location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetConfig {
    /// Path to the JSON array of state records.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Which fact store implementation to run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// `Dragonfly` (or any Redis-compatible server).
    #[default]
    Dragonfly,
    /// Process-local map; facts are lost on restart.
    Memory,
}

/// Fact store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StoreBackend,

    /// `Dragonfly` (Redis-compatible) URL.
    #[serde(default = "default_dragonfly_url")]
    pub dragonfly_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            dragonfly_url: default_dragonfly_url(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    3500
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/states.json")
}

fn default_dragonfly_url() -> String {
    String::from("redis://localhost:6379")
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3500);
        assert_eq!(config.dataset.path, PathBuf::from("data/states.json"));
        assert_eq!(config.store.backend, StoreBackend::Dragonfly);
        assert_eq!(config.store.dragonfly_url, "redis://localhost:6379");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8081

dataset:
  path: "/srv/states.json"

store:
  backend: memory
  dragonfly_url: "redis://cache:6379"

logging:
  level: "debug"
  json: true
"#;
        let config = AppConfig::parse_yaml(yaml).unwrap_or_default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.dataset.path, PathBuf::from("/srv/states.json"));
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.dragonfly_url, "redis://cache:6379");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = AppConfig::parse_yaml("server:\n  port: 9000\n").unwrap_or_default();
        assert_eq!(config.server.port, 9000);
        // Everything else uses defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.backend, StoreBackend::Dragonfly);
    }

    #[test]
    fn parse_empty_yaml() {
        assert_eq!(AppConfig::parse_yaml("").ok(), Some(AppConfig::default()));
    }

    #[test]
    fn parse_rejects_unknown_backend() {
        let result = AppConfig::parse_yaml("store:\n  backend: mongo\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_take_precedence() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|var| match var {
            "PORT" => Some(String::from("4000")),
            "FACT_STORE" => Some(String::from("memory")),
            "DRAGONFLY_URL" => Some(String::from("redis://elsewhere:6379")),
            "STATES_DATASET" => Some(String::from("/tmp/states.json")),
            _ => None,
        });
        assert!(result.is_ok());
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.dragonfly_url, "redis://elsewhere:6379");
        assert_eq!(config.dataset.path, PathBuf::from("/tmp/states.json"));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn env_override_rejects_bad_port() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|var| {
            (var == "PORT").then(|| String::from("not-a-port"))
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride { var: "PORT", .. })
        ));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("statefacts-config.yaml");
        if path.exists() {
            let contents = std::fs::read_to_string(&path).unwrap_or_default();
            let config = AppConfig::parse_yaml(&contents);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
