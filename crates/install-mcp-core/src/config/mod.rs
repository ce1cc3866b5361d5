//! Client configuration loading and persistence.
//!
//! A [`ClientConfig`] is the in-memory server map of one client config file.
//! It is read once per install, gets one entry inserted or replaced, and is
//! written back through a [`ConfigStore`].

mod json;
mod store;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ClientDescriptor;
use crate::error::ConfigError;
use crate::install::ServerEntry;

pub use json::{extract_map_at_path, load_json_map, set_map_at_path, write_json_map};
pub use store::FileConfigStore;

/// Server map of a client configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Entries keyed by server name. Values are kept as raw JSON so entries
    /// this tool did not write (env, url, ...) survive a round trip.
    #[serde(default)]
    pub mcp_servers: Map<String, Value>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_servers(mcp_servers: Map<String, Value>) -> Self {
        Self { mcp_servers }
    }

    /// Insert or overwrite the entry for `name`, returning the previous value.
    pub fn insert_server(&mut self, name: &str, entry: &ServerEntry) -> Option<Value> {
        self.mcp_servers.insert(name.to_string(), entry.to_value())
    }

    /// Read an entry back as a [`ServerEntry`], if it has that shape.
    pub fn server(&self, name: &str) -> Option<ServerEntry> {
        self.mcp_servers
            .get(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mcp_servers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.mcp_servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mcp_servers.is_empty()
    }
}

/// Reader/writer for client configurations.
pub trait ConfigStore {
    /// Load the configuration for `client`, or an empty one if none exists yet.
    fn read_config(&self, client: &ClientDescriptor, local: bool)
    -> Result<ClientConfig, ConfigError>;

    /// Persist `config` for `client`, preserving unrelated parts of the file.
    fn write_config(
        &self,
        config: &ClientConfig,
        client: &ClientDescriptor,
        local: bool,
    ) -> Result<(), ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(command: &str, args: &[&str]) -> ServerEntry {
        ServerEntry {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn insert_server_overwrites_existing_name() {
        let mut config = ClientConfig::new();

        let first = config.insert_server("demo", &entry("node", &["a.js"]));
        let second = config.insert_server("demo", &entry("node", &["b.js"]));

        assert!(first.is_none());
        assert_eq!(second, Some(json!({"command": "node", "args": ["a.js"]})));
        assert_eq!(config.len(), 1);
        assert_eq!(config.server("demo"), Some(entry("node", &["b.js"])));
    }

    #[test]
    fn server_with_foreign_shape_is_not_an_entry() {
        let mut servers = Map::new();
        servers.insert("remote".to_string(), json!({"url": "https://example.com/mcp"}));
        let config = ClientConfig::from_servers(servers);

        assert!(config.contains("remote"));
        assert!(config.server("remote").is_none());
    }

    #[test]
    fn serializes_with_mcp_servers_key() {
        let mut config = ClientConfig::new();
        config.insert_server("demo", &entry("npx", &["-y", "demo"]));

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            value,
            json!({"mcpServers": {"demo": {"command": "npx", "args": ["-y", "demo"]}}})
        );
    }
}
