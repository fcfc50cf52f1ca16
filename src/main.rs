use clap::Parser;

use clipshelf::bootstrap::{load_app_config, run_command, tracing::init_tracing_subscriber, Settings};
use clipshelf::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_app_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&config)?;
    init_tracing_subscriber(&settings)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "clipshelf starting");

    run_command(cli.command(), &settings).await
}
