//! Command-line interface for tictactoe_server.

use clap::{Parser, Subcommand};

/// Tic-tac-toe game server with a REST interface
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "In-memory tic-tac-toe game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to (falls back to $PORT, then the config file, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Maximum number of concurrent games
        #[arg(long)]
        max_games: Option<usize>,
    },

    /// Print the resolved configuration and exit
    Config {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
