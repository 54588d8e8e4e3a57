//! Database ping command

use anyhow::{bail, Context, Result};

use cari_server::PoolManager;

use super::DatabaseArgs;

/// Connect with retry, run `SELECT 1` and print the result.
pub async fn run_ping(args: DatabaseArgs) -> Result<()> {
    let manager = PoolManager::new(args.pool_config());
    if !manager.connect().await {
        bail!(
            "Could not connect to the database after {} attempts",
            manager.config().connect_attempts
        );
    }

    let result = manager.ping().await.context("Ping failed");
    manager.release().await;

    println!("ok: result={}", result?);
    Ok(())
}
