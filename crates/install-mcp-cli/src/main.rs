//! install-mcp - install MCP servers into AI client configurations
//!
//! Usage:
//!   install-mcp install <TARGET> --client <CLIENT>   # Install a server
//!   install-mcp i <TARGET> --client <CLIENT> -y      # Alias, no confirmation
//!   install-mcp clients                              # List supported clients

mod terminal;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use install_mcp_core::client::ClientContext;
use install_mcp_core::client::registry::ClientRegistry;
use install_mcp_core::config::FileConfigStore;
use install_mcp_core::install::{DEFAULT_NAME, InstallRequest, Installer};
use install_mcp_core::settings::Settings;

use crate::terminal::TerminalUi;

#[derive(Parser)]
#[command(name = "install-mcp")]
#[command(about = "Install MCP servers into AI client configurations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install MCP server
    // `-h` is taken by --host; help stays available as --help
    #[command(alias = "i", disable_help_flag = true)]
    Install(Box<InstallArgs>),

    /// List supported clients
    Clients {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Args)]
struct InstallArgs {
    /// Installation target (URL or command)
    target: Option<String>,
    /// Name of the server (auto-extracted from target if empty)
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,
    /// Client to use for installation
    #[arg(long)]
    client: String,
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
    /// Gateway to use for installation [default: mcp-remote@0.1.17]
    #[arg(long)]
    gateway: Option<String>,
    /// Host to use for installation [default: 127.0.0.1]
    #[arg(short = 'h', long)]
    host: Option<String>,
    /// Transport to use for installation [default: http-only]
    #[arg(short = 't', long)]
    transport: Option<String>,
    /// Install to the local directory instead of the default location
    #[arg(long)]
    local: bool,
    /// Additional arguments to pass to the gateway (currently not applied)
    #[arg(long, allow_hyphen_values = true)]
    args: Option<String>,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl InstallArgs {
    fn into_request(self, settings: &Settings) -> InstallRequest {
        InstallRequest {
            target: self.target,
            name: Some(self.name),
            client: self.client,
            local: self.local,
            auto_confirm: self.yes,
            gateway: Some(settings.gateway(self.gateway)),
            host: Some(settings.host(self.host)),
            transport: Some(settings.transport(self.transport)),
            extra_args: self.args,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Install(args) => run_install(*args)?,
        Commands::Clients { format } => run_clients(format)?,
    }

    Ok(())
}

fn run_install(args: InstallArgs) -> Result<()> {
    let settings = match Settings::default_path() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let registry = ClientRegistry::with_default_clients();
    let ctx = ClientContext::from_env().context("Failed to resolve working directory")?;
    let store = FileConfigStore::new(ctx);

    let request = args.into_request(&settings);
    tracing::debug!(client = %request.client, local = request.local, "Running install");

    // Failures are reported by the installer; the process still exits cleanly
    let installer = Installer::new(&registry, &store);
    installer.run(&request, &mut TerminalUi::new());

    Ok(())
}

fn run_clients(format: OutputFormat) -> Result<()> {
    let registry = ClientRegistry::with_default_clients();
    let ctx = ClientContext::from_env().context("Failed to resolve working directory")?;
    let store = FileConfigStore::new(ctx);

    let rows: Vec<ClientRow> = registry
        .all()
        .iter()
        .map(|client| ClientRow {
            id: client.id(),
            name: client.display_name(),
            global: store
                .config_path(client, false)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|e| format!("({e})")),
            local: client.supports_local().then(|| {
                store
                    .config_path(client, true)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|e| format!("({e})"))
            }),
        })
        .collect();

    match format {
        OutputFormat::Table => print_clients_table(&rows),
        OutputFormat::Json => print_clients_json(&rows)?,
    }
    Ok(())
}

struct ClientRow {
    id: &'static str,
    name: &'static str,
    global: String,
    local: Option<String>,
}

fn print_clients_table(rows: &[ClientRow]) {
    println!("{:<14} {:<20} Config", "Client", "Name");
    println!("{}", "-".repeat(70));
    for row in rows {
        println!("{:<14} {:<20} {}", row.id, row.name, row.global);
        if let Some(local) = &row.local {
            println!("{:<14} {:<20} {} (--local)", "", "", local);
        }
    }
}

fn print_clients_json(rows: &[ClientRow]) -> Result<()> {
    let output: Vec<_> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "id": row.id,
                "name": row.name,
                "global": row.global,
                "local": row.local,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
