//! TZL CLI - Command line client for the town zoning lookup server.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tzl-cli",
    version,
    about = "Town zoning ordinance lookup client"
)]
struct Cli {
    #[command(subcommand)]
    command: tzl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tzl_cmd::run(cli.command).await
}
