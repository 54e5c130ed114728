//! Demo API configuration module.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Deployment variables (highest priority)                            │
//! │     PORT, APP_ENV / NODE_ENV, GITHUB_SHA, GITHUB_RUN_NUMBER            │
//! │                                                                         │
//! │  2. Prefixed environment variables                                     │
//! │     DEMO_API_PORT=8080, DEMO_API_BIND_ADDR=127.0.0.1                   │
//! │                                                                         │
//! │  3. TOML config file (optional)                                        │
//! │     $DEMO_API_CONFIG, default ./demo-api.toml                          │
//! │                                                                         │
//! │  4. Default values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Config file read when `DEMO_API_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "demo-api.toml";

/// Prefix for environment variables that map 1:1 onto config keys.
const ENV_PREFIX: &str = "DEMO_API";

/// Demo API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Interface to bind
    pub bind_addr: String,

    /// Deployment environment name (development, staging, production...)
    pub environment: String,

    /// Identifier of the deployed build, usually a commit SHA
    pub deployment_id: String,

    /// CI run number that produced the build
    pub build_number: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 3000,
            bind_addr: "0.0.0.0".to_string(),
            environment: "development".to_string(),
            deployment_id: "local".to_string(),
            build_number: 0,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment and optional file.
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let file = vars
            .get("DEMO_API_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::from_sources(Some(&file), vars)
    }

    /// Load configuration from an explicit file and variable set.
    ///
    /// A missing file is not an error. Tests use this to avoid touching the
    /// real process environment.
    pub fn from_sources(
        file: Option<&Path>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();
        // Empty deployment variables count as unset.
        let set = |key: &str| vars.get(key).filter(|value| !value.is_empty()).cloned();
        let environment = set("APP_ENV").or_else(|| set("NODE_ENV"));

        let mut builder = Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("environment", defaults.environment)?
            .set_default("deployment_id", defaults.deployment_id)?
            .set_default("build_number", 0_i64)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("port", set("PORT"))?
            .set_override_option("environment", environment)?
            .set_override_option("deployment_id", set("GITHUB_SHA"))?
            .set_override_option("build_number", set("GITHUB_RUN_NUMBER"))?
            .build()?
            .try_deserialize::<ApiConfig>()?;

        // Fail at startup rather than at bind time.
        config.socket_addr()?;

        Ok(config)
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("bind_addr '{}'", self.bind_addr)))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = ApiConfig::from_sources(None, HashMap::new()).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_deployment_variables() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[
                ("PORT", "8080"),
                ("NODE_ENV", "production"),
                ("GITHUB_SHA", "4f2a9c1"),
                ("GITHUB_RUN_NUMBER", "57"),
            ]),
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.deployment_id, "4f2a9c1");
        assert_eq!(config.build_number, 57);
    }

    #[test]
    fn test_empty_deployment_variables_use_defaults() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[
                ("PORT", ""),
                ("NODE_ENV", ""),
                ("GITHUB_SHA", ""),
                ("GITHUB_RUN_NUMBER", ""),
            ]),
        )
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.deployment_id, "local");
        assert_eq!(config.build_number, 0);
    }

    #[test]
    fn test_empty_app_env_falls_back_to_node_env() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[("APP_ENV", ""), ("NODE_ENV", "production")]),
        )
        .unwrap();
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_app_env_wins_over_node_env() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[("APP_ENV", "staging"), ("NODE_ENV", "production")]),
        )
        .unwrap();
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_prefixed_variables() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[("DEMO_API_BIND_ADDR", "127.0.0.1"), ("DEMO_API_PORT", "4000")]),
        )
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_port_variable_beats_prefixed_port() {
        let config = ApiConfig::from_sources(
            None,
            vars(&[("DEMO_API_PORT", "4000"), ("PORT", "5000")]),
        )
        .unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(ApiConfig::from_sources(None, vars(&[("PORT", "not-a-port")])).is_err());
        assert!(ApiConfig::from_sources(None, vars(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_invalid_bind_addr_is_rejected() {
        let err = ApiConfig::from_sources(None, vars(&[("DEMO_API_BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_file_source_sits_below_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000\nenvironment = \"qa\"\nbuild_number = 3").unwrap();

        let config = ApiConfig::from_sources(Some(file.path()), vars(&[("GITHUB_RUN_NUMBER", "4")]))
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.environment, "qa");
        assert_eq!(config.build_number, 4);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let path = Path::new("/definitely/not/here/demo-api.toml");
        let config = ApiConfig::from_sources(Some(path), HashMap::new()).unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
