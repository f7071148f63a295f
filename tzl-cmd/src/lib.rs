//! Command implementations for the TZL CLI.
//!
//! Provides subcommands for looking up a city's zoning ordinance against a running
//! server and for checking that server's health.

use clap::{Subcommand, ValueEnum};
use tzl_core::config::ClientConfig;

pub mod health;
pub mod lookup;

/// Where the lookup server listens by default.
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

/// How `lookup` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// The server's result as JSON
    Json,
    /// Escaped HTML fragment of the result region
    Html,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the zoning ordinance document for a city
    Lookup {
        /// City name, optionally with state (e.g. "Boston, MA")
        city: String,

        /// Base URL of the lookup server
        #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Give up after this many seconds
        #[arg(short = 't', long)]
        timeout_secs: Option<u64>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that the lookup server is up
    Health {
        /// Base URL of the lookup server
        #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

fn client_config(server: String, timeout_secs: Option<u64>) -> ClientConfig {
    let config = ClientConfig::default().with_base_url(server);
    match timeout_secs {
        Some(secs) => config.with_timeout_ms(secs.saturating_mul(1000)),
        None => config,
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Lookup {
            city,
            server,
            timeout_secs,
            format,
        } => lookup::run_lookup(&city, client_config(server, timeout_secs), format).await,
        Command::Health { server } => health::run_health(client_config(server, None)).await,
    }
}
