use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use urf_core_db::memory::MemoryStore;
use urf_core_db::UnitOfWorkFactory;
use urf_core_postgres::{default_database_url, DbConfig, PgContextFactory};

use crate::config::{Cli, Command};
use crate::router::{build_router, AppState};

/// Execute the selected command to completion
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command() {
        Command::Serve => serve(&cli).await,
        Command::Migrate => migrate(&cli).await,
    }
}

fn context_factory(cli: &Cli, database_url: String) -> PgContextFactory {
    let config = DbConfig::new(database_url).with_max_connections(cli.max_connections);
    PgContextFactory::new(config, cli.deployment)
}

async fn migrate(cli: &Cli) -> anyhow::Result<()> {
    let factory = match &cli.database_url {
        Some(url) => context_factory(cli, url.clone()),
        None => {
            tracing::info!(
                url = %default_database_url(cli.deployment),
                "No DATABASE_URL set, using the development database"
            );
            PgContextFactory::design_time(cli.deployment)
        }
    };

    let pool = factory.connect_pool().await?;
    let created = factory.migrate(&pool).await?;
    tracing::info!(
        context = cli.deployment.context_name(),
        seeded = created,
        "Migrations applied"
    );
    Ok(())
}

async fn serve(cli: &Cli) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;

    match &cli.database_url {
        Some(url) => {
            let repositories = context_factory(cli, url.clone())
                .create_repositories()
                .await
                .context("failed to prepare the database")?;
            serve_with(listener, AppState::new(Arc::new(repositories), cli.deployment)).await
        }
        None => {
            let store = MemoryStore::for_deployment(cli.deployment)?;
            tracing::warn!(
                rows = store.len(),
                "No DATABASE_URL set, serving from a non-durable in-memory store"
            );
            serve_with(listener, AppState::new(Arc::new(store), cli.deployment)).await
        }
    }
}

async fn serve_with<F: UnitOfWorkFactory>(
    listener: TcpListener,
    state: AppState<F>,
) -> anyhow::Result<()> {
    let base_path = state.base_path();
    let app = build_router(state);

    tracing::info!(addr = %listener.local_addr()?, %base_path, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
