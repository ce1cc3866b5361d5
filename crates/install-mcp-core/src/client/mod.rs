//! Client descriptors for the AI applications whose config files we edit.
//!
//! Each client declares where its MCP configuration lives (globally and,
//! optionally, per project) and the JSON key path of its server map.

pub mod registry;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Base directory a config location is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRoot {
    /// The user's home directory
    Home,
    /// Platform application config directory
    /// (`~/.config`, `~/Library/Application Support`, `%APPDATA%`)
    AppConfig,
    /// The current project directory
    Project,
}

/// Where a client keeps its MCP server map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub root: PathRoot,
    pub relative_path: PathBuf,
    /// JSON key path to the server map inside the file
    pub servers_path: Vec<&'static str>,
}

impl ConfigLocation {
    /// A location whose server map sits under the top-level `mcpServers` key.
    pub fn mcp_servers(root: PathRoot, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            root,
            relative_path: relative_path.into(),
            servers_path: vec!["mcpServers"],
        }
    }

    pub fn with_servers_path(mut self, servers_path: &[&'static str]) -> Self {
        self.servers_path = servers_path.to_vec();
        self
    }

    /// Resolve to an absolute file path.
    pub fn resolve(&self, ctx: &ClientContext) -> Result<PathBuf, ConfigError> {
        let base = match self.root {
            PathRoot::Home => ctx.home_dir.as_deref().ok_or(ConfigError::NoBaseDir("home"))?,
            PathRoot::AppConfig => ctx
                .app_config_dir
                .as_deref()
                .ok_or(ConfigError::NoBaseDir("application config"))?,
            PathRoot::Project => ctx.project_root.as_path(),
        };
        Ok(base.join(&self.relative_path))
    }
}

/// A supported client and its config locations.
#[derive(Debug, Clone)]
pub struct ClientDescriptor {
    id: &'static str,
    display_name: &'static str,
    global: ConfigLocation,
    local: Option<ConfigLocation>,
}

impl ClientDescriptor {
    pub fn new(id: &'static str, display_name: &'static str, global: ConfigLocation) -> Self {
        Self {
            id,
            display_name,
            global,
            local: None,
        }
    }

    /// Add a per-project config location.
    pub fn with_local(mut self, local: ConfigLocation) -> Self {
        self.local = Some(local);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn global(&self) -> &ConfigLocation {
        &self.global
    }

    pub fn supports_local(&self) -> bool {
        self.local.is_some()
    }

    /// Location for the requested scope, `None` when `local` is unsupported.
    pub fn location(&self, local: bool) -> Option<&ConfigLocation> {
        if local {
            self.local.as_ref()
        } else {
            Some(&self.global)
        }
    }
}

/// Directories that client config locations are resolved against.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub home_dir: Option<PathBuf>,
    pub app_config_dir: Option<PathBuf>,
    pub project_root: PathBuf,
}

impl ClientContext {
    pub fn new(home_dir: PathBuf, app_config_dir: PathBuf, project_root: PathBuf) -> Self {
        Self {
            home_dir: Some(home_dir),
            app_config_dir: Some(app_config_dir),
            project_root,
        }
    }

    /// Build a context from the running user's environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let project_root = std::env::current_dir()?;
        Ok(Self {
            home_dir: dirs::home_dir(),
            app_config_dir: dirs::config_dir(),
            project_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> ClientContext {
        ClientContext::new(
            PathBuf::from("/home/user"),
            PathBuf::from("/home/user/.config"),
            PathBuf::from("/work/project"),
        )
    }

    #[test]
    fn resolve_joins_relative_path_to_root() {
        let ctx = test_context();

        let home = ConfigLocation::mcp_servers(PathRoot::Home, ".cursor/mcp.json");
        let app =
            ConfigLocation::mcp_servers(PathRoot::AppConfig, "Claude/claude_desktop_config.json");
        let project = ConfigLocation::mcp_servers(PathRoot::Project, ".mcp.json");

        assert_eq!(
            home.resolve(&ctx).unwrap(),
            PathBuf::from("/home/user/.cursor/mcp.json")
        );
        assert_eq!(
            app.resolve(&ctx).unwrap(),
            PathBuf::from("/home/user/.config/Claude/claude_desktop_config.json")
        );
        assert_eq!(
            project.resolve(&ctx).unwrap(),
            PathBuf::from("/work/project/.mcp.json")
        );
    }

    #[test]
    fn resolve_without_home_dir_fails() {
        let ctx = ClientContext {
            home_dir: None,
            app_config_dir: None,
            project_root: PathBuf::from("/work"),
        };
        let location = ConfigLocation::mcp_servers(PathRoot::Home, ".cursor/mcp.json");

        let err = location.resolve(&ctx).unwrap_err();

        assert!(matches!(err, ConfigError::NoBaseDir("home")));
    }

    #[test]
    fn location_without_local_returns_none() {
        let client = ClientDescriptor::new(
            "claude",
            "Claude Desktop",
            ConfigLocation::mcp_servers(PathRoot::AppConfig, "Claude/claude_desktop_config.json"),
        );

        assert!(!client.supports_local());
        assert!(client.location(true).is_none());
        assert!(client.location(false).is_some());
    }

    #[test]
    fn with_servers_path_overrides_default_key() {
        let location = ConfigLocation::mcp_servers(PathRoot::AppConfig, "Code/User/settings.json")
            .with_servers_path(&["mcp", "servers"]);

        assert_eq!(location.servers_path, vec!["mcp", "servers"]);
    }
}
