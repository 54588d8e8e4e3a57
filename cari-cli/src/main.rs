//! cari CLI - HTTP service for cari account records
//!
//! Subcommands:
//! - `serve`: run the HTTP server (health, db-ping, cari inserts)
//! - `migrate`: apply the database schema and exit
//! - `ping`: check that the database answers `SELECT 1`

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cari",
    author,
    version,
    about = "Cari account service with a self-healing PostgreSQL pool"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Apply the database schema and exit
    Migrate(commands::DatabaseArgs),
    /// Run SELECT 1 against the database
    Ping(commands::DatabaseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local development convenience; deployments set the environment directly
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }
    Ok(())
}
