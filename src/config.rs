//! Server configuration.
//!
//! Values come from an optional YAML file, then environment overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File read when `CONFIG` is not set and the file exists.
const DEFAULT_CONFIG_FILE: &str = "webserver.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. "0.0.0.0:6789"
    pub listen_addr: String,
    /// Ceiling on connections being served at the same time
    pub max_connections: usize,
    /// Kernel accept queue length
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory request targets are resolved under
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:6789".to_string(),
            max_connections: 256,
            backlog: 128,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the configuration the server starts with.
    ///
    /// `CONFIG` names a YAML file that must exist. Without it, `webserver.yaml`
    /// is read if present. `LISTEN` and `ROOT` override the listen address and
    /// the document root.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses and validates a YAML document. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(yaml).context("Failed to parse YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.server.listen_addr.trim().is_empty(),
            "server.listen_addr must not be empty"
        );
        anyhow::ensure!(
            self.server.max_connections > 0,
            "server.max_connections must be at least 1"
        );
        anyhow::ensure!(self.server.backlog > 0, "server.backlog must be at least 1");
        Ok(())
    }
}
