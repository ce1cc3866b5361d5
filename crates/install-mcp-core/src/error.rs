//! Error types for install operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or persisting a client configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The directory a client config location is rooted at could not be determined
    #[error("Could not determine {0} directory")]
    NoBaseDir(&'static str),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but a key on the server map path is not an object
    #[error("Expected '{key}' to be a JSON object in {}", path.display())]
    Shape { path: PathBuf, key: String },

    #[error("Failed to serialize config for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main error type for the install operation
#[derive(Error, Debug)]
pub enum InstallError {
    /// Requested client is not in the registry
    #[error("Invalid client: {client}. Available clients: {}", available.join(", "))]
    InvalidClient {
        client: String,
        available: Vec<String>,
    },

    /// `--local` was requested for a client with only a global config file
    #[error("Client '{0}' does not support local installation")]
    LocalUnsupported(String),

    /// Reading or writing the client configuration failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The interactive prompt could not be completed
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Result type alias for install operations
pub type Result<T> = std::result::Result<T, InstallError>;
