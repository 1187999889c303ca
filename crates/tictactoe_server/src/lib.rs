//! Tic-tac-toe game server.
//!
//! # Architecture
//!
//! - **Registry**: in-memory map from game id to the latest engine snapshot
//! - **Routes**: axum REST API over the registry
//! - **Config**: TOML file, environment and CLI layering
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictactoe_server::{GameRegistry, create_router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = create_router(Arc::new(GameRegistry::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod registry;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody, RegistryError};
pub use registry::{GameId, GameRegistry};
pub use routes::{
    DeleteResponse, GameView, HealthResponse, MoveRequest, NewGameRequest, create_router,
};
