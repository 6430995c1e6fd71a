//! Command-line interface.
//!
//! main.rs stays a dispatch shim; startup logic lives here. The one
//! command today is `serve`: load configuration from the environment,
//! attempt the store connect, then serve forever. A failed connect does
//! not abort the process - the service runs and answers "store down" on
//! every data operation until it is restarted.

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::api::{ApiHandler, ApiServer, SeedCatalog};
use crate::config::AppConfig;
use crate::logging::Logger;
use crate::store::{MemoryStore, StoreStatus};

/// docgate - a schema-free JSON record API
#[derive(Parser, Debug)]
#[command(name = "docgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Listen port (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments and dispatch.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => serve(port),
    }
}

fn serve(port_override: Option<u16>) -> Result<(), CliError> {
    let mut config = AppConfig::from_env();
    if let Some(port) = port_override {
        config.port = port;
    }

    let endpoint = config.store.endpoint();
    let status = StoreStatus::new();
    let store = match MemoryStore::connect(&config.store) {
        Ok(store) => {
            status.mark_connected();
            Logger::info("STORE_CONNECTED", &[("endpoint", endpoint.as_str())]);
            store
        }
        Err(err) => {
            let reason = err.to_string();
            Logger::error(
                "STORE_CONNECT_FAILED",
                &[("endpoint", endpoint.as_str()), ("error", reason.as_str())],
            );
            // Placeholder store; the down readiness flag keeps it unreached
            MemoryStore::new()
        }
    };

    let handler = ApiHandler::new(store, status, SeedCatalog::default());
    let server = ApiServer::new(handler);
    let addr = config.socket_addr();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve(&addr))?;
    Ok(())
}
