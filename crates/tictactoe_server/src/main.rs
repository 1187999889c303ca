//! Tic-tac-toe server binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tictactoe_server::{GameRegistry, ServerConfig, create_router};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_server=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            config,
            max_games,
        } => {
            let config = load_config(config)?.with_overrides(host, port, max_games);
            run_http_server(config).await
        }
        Command::Config { config } => {
            let config = load_config(config)?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Resolve file and environment layers.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    Ok(config.with_port_env(std::env::var("PORT").ok())?)
}

/// Run the HTTP game server until Ctrl-C.
#[instrument(skip_all, fields(addr = %config.bind_address()))]
async fn run_http_server(config: ServerConfig) -> Result<()> {
    let registry = match config.max_games() {
        Some(limit) => GameRegistry::with_capacity_limit(*limit),
        None => GameRegistry::new(),
    };
    let app = create_router(Arc::new(registry));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Server ready at http://{}/tictactoe", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
