//! MCP server installation into a client configuration.
//!
//! The install flow runs strictly in order: validate the client, resolve the
//! target, resolve the name, confirm, then read the client config, insert
//! the entry and write it back.

mod entry;
mod name;

use tracing::{debug, warn};

use crate::client::ClientDescriptor;
use crate::client::registry::ClientRegistry;
use crate::config::ConfigStore;
use crate::error::{InstallError, Result};
use crate::ui::Interaction;

pub use entry::{DEFAULT_GATEWAY, ServerEntry, build_entry};
pub use name::{infer_name, is_url_target};

/// Default `--name` of the command line.
pub const DEFAULT_NAME: &str = "spydr-memory";
/// Default `--host`. Reported to the user, not written to the entry.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default `--transport` passed to the gateway.
pub const DEFAULT_TRANSPORT: &str = "http-only";

/// Request to install an MCP server.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    /// URL or command line; prompted for when absent
    pub target: Option<String>,
    /// Server name; inferred from the target when absent or empty
    pub name: Option<String>,
    pub client: String,
    /// Write the project config instead of the user-wide one
    pub local: bool,
    /// Skip the confirmation prompt
    pub auto_confirm: bool,
    pub gateway: Option<String>,
    pub host: Option<String>,
    pub transport: Option<String>,
    /// Extra gateway arguments. Accepted but not applied to the entry.
    pub extra_args: Option<String>,
}

impl InstallRequest {
    pub fn new(client: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn with_extra_args(mut self, args: impl Into<String>) -> Self {
        self.extra_args = Some(args.into());
        self
    }
}

/// Result of an install run.
#[derive(Debug)]
pub enum InstallOutcome {
    Installed {
        name: String,
        target: String,
        entry: ServerEntry,
        /// An entry with the same name existed and was overwritten
        replaced: bool,
    },
    /// The user declined the confirmation prompt
    Declined,
    /// The error has already been reported through [`Interaction::log_error`]
    Failed(InstallError),
}

impl InstallOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed { .. })
    }
}

/// Installs server entries into client configs.
pub struct Installer<'a> {
    registry: &'a ClientRegistry,
    store: &'a dyn ConfigStore,
}

impl<'a> Installer<'a> {
    pub fn new(registry: &'a ClientRegistry, store: &'a dyn ConfigStore) -> Self {
        Self { registry, store }
    }

    /// Run an install, reporting any failure through `ui`.
    ///
    /// Never returns an error: failures are logged and surfaced as
    /// [`InstallOutcome::Failed`].
    pub fn run(&self, request: &InstallRequest, ui: &mut dyn Interaction) -> InstallOutcome {
        match self.execute(request, ui) {
            Ok(outcome) => outcome,
            Err(err) => {
                ui.log_error(&err.to_string());
                InstallOutcome::Failed(err)
            }
        }
    }

    /// Run an install, returning errors to the caller unreported.
    pub fn execute(
        &self,
        request: &InstallRequest,
        ui: &mut dyn Interaction,
    ) -> Result<InstallOutcome> {
        let client = self.validate_client(&request.client, request.local)?;

        let target = match non_empty(request.target.as_deref()) {
            Some(target) => target.to_string(),
            None => ui.prompt_text("Enter the installation target (URL or command):")?,
        };

        let name = resolve_name(request.name.as_deref(), &target, ui)?;

        if let Some(host) = non_empty(request.host.as_deref()) {
            ui.log_info(&format!("Using host {host}"));
        }
        if let Some(transport) = non_empty(request.transport.as_deref()) {
            ui.log_info(&format!("Using transport {transport}"));
        }
        if let Some(args) = non_empty(request.extra_args.as_deref()) {
            warn!(args = %args, "Additional gateway arguments are not applied to the server entry");
        }

        ui.log_info(&format!(
            "Installing MCP server \"{name}\" in {} with target {target}",
            client.id()
        ));

        let scope = if request.local { " (locally)" } else { "" };
        if !request.auto_confirm {
            let ready = ui.prompt_confirm(&format!(
                "Are you ready to install MCP server \"{name}\" ({target}) in {}{scope}?",
                client.id()
            ))?;
            if !ready {
                debug!(server = %name, "Install declined");
                return Ok(InstallOutcome::Declined);
            }
        }

        let entry = build_entry(
            &target,
            request.gateway.as_deref(),
            request.transport.as_deref(),
        );

        let mut config = self.store.read_config(client, request.local)?;
        let replaced = config.insert_server(&name, &entry).is_some();
        self.store.write_config(&config, client, request.local)?;

        ui.log_success(&format!(
            "Successfully installed MCP server \"{name}\" ({target}) in {}{scope}.",
            client.id()
        ));

        Ok(InstallOutcome::Installed {
            name,
            target,
            entry,
            replaced,
        })
    }

    fn validate_client(&self, id: &str, local: bool) -> Result<&'a ClientDescriptor> {
        let client = self
            .registry
            .get(id)
            .ok_or_else(|| InstallError::InvalidClient {
                client: id.to_string(),
                available: self
                    .registry
                    .client_ids()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })?;
        if local && !client.supports_local() {
            return Err(InstallError::LocalUnsupported(id.to_string()));
        }
        Ok(client)
    }
}

fn resolve_name(
    requested: Option<&str>,
    target: &str,
    ui: &mut dyn Interaction,
) -> Result<String> {
    if let Some(name) = non_empty(requested) {
        return Ok(name.to_string());
    }
    let inferred = infer_name(target);
    if !inferred.is_empty() {
        debug!(server = %inferred, install_target = %target, "Inferred server name");
        return Ok(inferred);
    }
    ui.prompt_text("Enter the name of the server:")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
