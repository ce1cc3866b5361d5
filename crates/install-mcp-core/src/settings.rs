//! User settings from `install-mcp/config.toml`.
//!
//! Supplies defaults for gateway, transport and host. Command-line flags
//! take precedence over the file, the file over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::install::{DEFAULT_GATEWAY, DEFAULT_HOST, DEFAULT_TRANSPORT};

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "INSTALL_MCP_CONFIG";

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub defaults: InstallDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallDefaults {
    pub gateway: Option<String>,
    pub transport: Option<String>,
    pub host: Option<String>,
}

impl Settings {
    /// Settings file location: `$INSTALL_MCP_CONFIG`, else
    /// `<config dir>/install-mcp/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("install-mcp").join("config.toml"))
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("TOML parsing error: {}", e))
    }

    /// Gateway package: flag, then settings, then [`DEFAULT_GATEWAY`].
    pub fn gateway(&self, flag: Option<String>) -> String {
        pick(flag, &self.defaults.gateway, DEFAULT_GATEWAY)
    }

    pub fn transport(&self, flag: Option<String>) -> String {
        pick(flag, &self.defaults.transport, DEFAULT_TRANSPORT)
    }

    pub fn host(&self, flag: Option<String>) -> String {
        pick(flag, &self.defaults.host, DEFAULT_HOST)
    }
}

fn pick(flag: Option<String>, configured: &Option<String>, builtin: &str) -> String {
    flag.or_else(|| configured.clone())
        .unwrap_or_else(|| builtin.to_string())
}
