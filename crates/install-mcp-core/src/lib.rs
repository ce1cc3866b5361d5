//! install-mcp Core Library
//!
//! Installs MCP server entries into the configuration files of AI clients
//! (Claude Desktop, Cursor, VS Code, ...). Provides name inference for
//! install targets, server entry construction, and the config read/merge/write
//! path, with prompting and logging abstracted behind [`ui::Interaction`].

pub mod client;
pub mod config;
pub mod error;
pub mod install;
pub mod settings;
pub mod ui;

/// Re-exports of commonly used types
pub mod prelude {
    // Client
    pub use crate::client::registry::ClientRegistry;
    pub use crate::client::{ClientContext, ClientDescriptor, ConfigLocation, PathRoot};

    // Configuration
    pub use crate::config::{ClientConfig, ConfigStore, FileConfigStore};

    // Install
    pub use crate::install::{
        DEFAULT_GATEWAY, InstallOutcome, InstallRequest, Installer, ServerEntry, build_entry,
        infer_name,
    };

    // Errors
    pub use crate::error::{ConfigError, InstallError};

    // Settings
    pub use crate::settings::Settings;

    // Interaction
    pub use crate::ui::Interaction;
}
