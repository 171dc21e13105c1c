//! Configuration loading and management

use crate::entities::Teacher;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Path prefix the principal routes are mounted under ("" for none)
    pub principal_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7755,
            principal_prefix: "/principal".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Teachers loaded into the in-memory store at startup
    pub teachers: Vec<Teacher>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: "info".to_string(),
            teachers: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.server.principal_prefix;
        if !prefix.is_empty() && !prefix.starts_with('/') {
            anyhow::bail!("server.principal_prefix must start with '/': {:?}", prefix);
        }

        let mut seen = std::collections::HashSet::new();
        for teacher in &self.teachers {
            if !seen.insert(teacher.id) {
                anyhow::bail!("duplicate teacher id {} in config", teacher.id);
            }
        }

        Ok(())
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
