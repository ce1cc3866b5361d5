//! File-backed config store for client configuration files.

use std::path::PathBuf;

use tracing::debug;

use crate::client::{ClientContext, ClientDescriptor, ConfigLocation};
use crate::error::ConfigError;

use super::json::{extract_map_at_path, load_json_map, set_map_at_path, write_json_map};
use super::{ClientConfig, ConfigStore};

/// Reads and writes client configs on disk, resolving locations against a
/// [`ClientContext`].
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    ctx: ClientContext,
}

impl FileConfigStore {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    /// Absolute path of the config file for `client` in the given scope.
    pub fn config_path(
        &self,
        client: &ClientDescriptor,
        local: bool,
    ) -> Result<PathBuf, ConfigError> {
        Self::location(client, local).resolve(&self.ctx)
    }

    fn location<'a>(client: &'a ClientDescriptor, local: bool) -> &'a ConfigLocation {
        // Unsupported local installs are rejected by the installer; direct
        // callers fall back to the global file.
        client.location(local).unwrap_or_else(|| client.global())
    }
}

impl ConfigStore for FileConfigStore {
    fn read_config(
        &self,
        client: &ClientDescriptor,
        local: bool,
    ) -> Result<ClientConfig, ConfigError> {
        let location = Self::location(client, local);
        let path = location.resolve(&self.ctx)?;
        debug!(client = client.id(), path = %path.display(), "Reading client config");

        let root = load_json_map(&path)?;
        let servers = extract_map_at_path(&root, &location.servers_path, &path)?;
        Ok(ClientConfig::from_servers(servers))
    }

    fn write_config(
        &self,
        config: &ClientConfig,
        client: &ClientDescriptor,
        local: bool,
    ) -> Result<(), ConfigError> {
        let location = Self::location(client, local);
        let path = location.resolve(&self.ctx)?;

        // Re-read so keys outside the server map written since the read survive
        let mut root = load_json_map(&path)?;
        set_map_at_path(
            &mut root,
            &location.servers_path,
            config.mcp_servers.clone(),
            &path,
        )?;

        debug!(
            client = client.id(),
            path = %path.display(),
            servers = config.len(),
            "Writing client config"
        );
        write_json_map(&path, &root)
    }
}
