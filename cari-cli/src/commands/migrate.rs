//! Schema migration command

use anyhow::{bail, Context, Result};

use cari_server::db::{acquire, migrations};

use super::DatabaseArgs;

/// Connect with retry, create the cari tables and close the pool.
pub async fn run_migrate(args: DatabaseArgs) -> Result<()> {
    let config = args.pool_config();
    let Some(pool) = acquire(&config, config.connect_attempts, config.retry_delay).await else {
        bail!("Could not connect to the database after {} attempts", config.connect_attempts);
    };

    let result = migrations::run(&pool).await.context("Migration failed");
    pool.close().await;
    result?;

    println!("Schema is up to date");
    Ok(())
}
