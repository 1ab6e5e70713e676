use clap::Parser;
use urf_core_api::{logging, server, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    tracing::info!(deployment = %cli.deployment, command = ?cli.command(), "Starting urf-api");

    server::run(cli).await
}
