//! Server entry construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::name::is_url_target;

/// Gateway package used to bridge URL targets when none is configured.
pub const DEFAULT_GATEWAY: &str = "mcp-remote@0.1.17";

/// How a client launches one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ServerEntry {
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "command": self.command,
            "args": self.args,
        })
    }
}

/// Build the entry for `target`.
///
/// URL targets run through `npx -y <gateway> <url>`, followed by
/// `--transport <transport>` when a transport is given. Command targets are
/// split on single spaces: the first token is the command, the rest are its
/// arguments verbatim. Quoted arguments containing spaces are not supported.
pub fn build_entry(target: &str, gateway: Option<&str>, transport: Option<&str>) -> ServerEntry {
    if is_url_target(target) {
        let gateway = gateway
            .filter(|g| !g.is_empty())
            .unwrap_or(DEFAULT_GATEWAY);
        let mut args = vec!["-y".to_string(), gateway.to_string(), target.to_string()];
        if let Some(transport) = transport.filter(|t| !t.is_empty()) {
            args.push("--transport".to_string());
            args.push(transport.to_string());
        }
        return ServerEntry {
            command: "npx".to_string(),
            args,
        };
    }

    let mut parts = target.split(' ');
    let command = parts.next().unwrap_or_default().to_string();
    ServerEntry {
        command,
        args: parts.map(str::to_string).collect(),
    }
}
