use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bakehouse")]
#[command(author, version, about = "Read-only JSON API over a bakery catalog")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the SQLite database file (overrides config)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Reset the database to the demo catalog
    Seed {
        /// Path to the SQLite database file (overrides config)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
