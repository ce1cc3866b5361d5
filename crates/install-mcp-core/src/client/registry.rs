//! Client registry for the set of supported client identifiers.
//!
//! The installer validates `--client` against a registry instance passed in
//! by the caller, so tests can supply a controlled set.

use super::{ClientDescriptor, ConfigLocation, PathRoot};

const VSCODE_GLOBAL_STORAGE: &str = "Code/User/globalStorage";

/// Registry of supported clients.
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    clients: Vec<ClientDescriptor>,
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::with_default_clients()
    }
}

impl ClientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
        }
    }

    /// Create a registry with all built-in clients.
    pub fn with_default_clients() -> Self {
        let clients = vec![
            ClientDescriptor::new(
                "claude",
                "Claude Desktop",
                ConfigLocation::mcp_servers(
                    PathRoot::AppConfig,
                    "Claude/claude_desktop_config.json",
                ),
            ),
            ClientDescriptor::new(
                "claude-code",
                "Claude Code",
                ConfigLocation::mcp_servers(PathRoot::Home, ".claude.json"),
            )
            .with_local(ConfigLocation::mcp_servers(PathRoot::Project, ".mcp.json")),
            ClientDescriptor::new(
                "cline",
                "Cline",
                ConfigLocation::mcp_servers(
                    PathRoot::AppConfig,
                    format!(
                        "{VSCODE_GLOBAL_STORAGE}/saoudrizwan.claude-dev/settings/cline_mcp_settings.json"
                    ),
                ),
            ),
            ClientDescriptor::new(
                "roo-cline",
                "Roo Code",
                ConfigLocation::mcp_servers(
                    PathRoot::AppConfig,
                    format!(
                        "{VSCODE_GLOBAL_STORAGE}/rooveterinaryinc.roo-cline/settings/mcp_settings.json"
                    ),
                ),
            ),
            ClientDescriptor::new(
                "windsurf",
                "Windsurf",
                ConfigLocation::mcp_servers(PathRoot::Home, ".codeium/windsurf/mcp_config.json"),
            ),
            ClientDescriptor::new(
                "witsy",
                "Witsy",
                ConfigLocation::mcp_servers(PathRoot::AppConfig, "Witsy/settings.json"),
            ),
            ClientDescriptor::new(
                "enconvo",
                "Enconvo",
                ConfigLocation::mcp_servers(PathRoot::Home, ".config/enconvo/mcp_config.json"),
            ),
            ClientDescriptor::new(
                "cursor",
                "Cursor",
                ConfigLocation::mcp_servers(PathRoot::Home, ".cursor/mcp.json"),
            )
            .with_local(ConfigLocation::mcp_servers(PathRoot::Project, ".cursor/mcp.json")),
            ClientDescriptor::new(
                "gemini-cli",
                "Gemini CLI",
                ConfigLocation::mcp_servers(PathRoot::Home, ".gemini/settings.json"),
            )
            .with_local(ConfigLocation::mcp_servers(
                PathRoot::Project,
                ".gemini/settings.json",
            )),
            // VS Code nests user-level servers under "mcp" in settings.json and
            // uses "servers" instead of "mcpServers" in .vscode/mcp.json
            ClientDescriptor::new(
                "vscode",
                "Visual Studio Code",
                ConfigLocation::mcp_servers(PathRoot::AppConfig, "Code/User/settings.json")
                    .with_servers_path(&["mcp", "servers"]),
            )
            .with_local(
                ConfigLocation::mcp_servers(PathRoot::Project, ".vscode/mcp.json")
                    .with_servers_path(&["servers"]),
            ),
        ];
        Self { clients }
    }

    /// Register a client. A client with the same id is replaced.
    pub fn register(&mut self, client: ClientDescriptor) {
        self.clients.retain(|c| c.id() != client.id());
        self.clients.push(client);
    }

    /// Get all registered clients.
    pub fn all(&self) -> &[ClientDescriptor] {
        &self.clients
    }

    /// Get a client by ID.
    pub fn get(&self, id: &str) -> Option<&ClientDescriptor> {
        self.clients.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// List all client IDs.
    pub fn client_ids(&self) -> Vec<&'static str> {
        self.clients.iter().map(|c| c.id()).collect()
    }
}
