//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use cari_server::{run_server, PoolManager, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CARI_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Seconds between background reconnect attempts while the database is down
    #[arg(long, default_value_t = 10)]
    pub reconcile_interval_secs: u64,

    /// Do not create the schema after connecting
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool_config = cari_server::PoolConfig {
        reconcile_interval: Duration::from_secs(args.reconcile_interval_secs.max(1)),
        run_migrations: !args.no_migrate,
        ..args.db.pool_config()
    };

    if pool_config.database_url.is_empty() {
        tracing::warn!("DATABASE_URL not set; serving without a database");
    }

    tracing::info!("Starting cari server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(PoolManager::new(pool_config), config)
        .await
        .context("Server error")?;

    Ok(())
}
