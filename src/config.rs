//! Configuration management for the config writer
//!
//! Values come from built-in defaults, an optional `config.toml`, and
//! environment overrides. Everything is loaded once at startup.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `CONFIG_WRITER_PORT=8080`.
pub const ENV_PREFIX: &str = "CONFIG_WRITER";

/// Bare environment variable holding the allowlist; wins over every other source.
pub const ALLOWED_CIDRS_ENV: &str = "ALLOWED_CIDRS";

const CONFIG_PATHS: [&str; 2] = [
    "config-writer/config", // container layout: /app/config-writer/config.toml
    "config",               // local development: ./config.toml
];

/// Server configuration. Requires a restart to change.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Directory every written file must stay inside
    pub output_root: String,

    /// Comma/whitespace separated CIDR prefixes; empty permits every peer
    pub allowed_cidrs: String,

    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Self::defaults()?;
        for config_path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        if let Ok(allowed_cidrs) = std::env::var(ALLOWED_CIDRS_ENV) {
            builder = builder.set_override("allowed_cidrs", allowed_cidrs)?;
        }

        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 3000_i64)?
            .set_default("output_root", "/output")?
            .set_default("allowed_cidrs", "")?
            .set_default("max_body_bytes", 10_i64 * 1024 * 1024)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.output_root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "output_root cannot be empty".into(),
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(config::ConfigError::Message(
                "max_body_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as a listen address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get output root as PathBuf
    pub fn output_root_path(&self) -> PathBuf {
        PathBuf::from(&self.output_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<ServerConfig, config::ConfigError> {
        let builder = ServerConfig::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        ServerConfig::from_builder(builder)
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.output_root, "/output");
        assert_eq!(config.allowed_cidrs, "");
        assert_eq!(config.listen_socket(), "0.0.0.0:3000");
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            bind_address = "127.0.0.1"
            port = 8080
            output_root = "/srv/configs"
            allowed_cidrs = "10.0.0.0/8, ::1/128"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_socket(), "127.0.0.1:8080");
        assert_eq!(config.output_root_path(), PathBuf::from("/srv/configs"));
        assert_eq!(config.allowed_cidrs, "10.0.0.0/8, ::1/128");
    }

    #[test]
    fn test_zero_port_rejected() {
        assert!(from_toml("port = 0").is_err());
    }

    #[test]
    fn test_empty_output_root_rejected() {
        assert!(from_toml("output_root = \"\"").is_err());
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        assert!(from_toml("max_body_bytes = 0").is_err());
    }
}
