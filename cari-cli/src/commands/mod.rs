//! Command implementations for the cari CLI

use std::time::Duration;

use clap::Args;

use cari_server::config::{DEFAULT_CONNECT_ATTEMPTS, DEFAULT_MAX_CONNECTIONS};
use cari_server::PoolConfig;

pub mod migrate;
pub mod ping;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use ping::run_ping;
pub use serve::run_serve;

/// Database connection arguments shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL; sslmode=require is appended when no sslmode is given
    #[arg(long, env = "DATABASE_URL", default_value = "", hide_default_value = true)]
    pub database_url: String,

    /// Connection attempts before giving up (serve: before reconciling in background)
    #[arg(long, default_value_t = DEFAULT_CONNECT_ATTEMPTS)]
    pub connect_attempts: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value_t = 2)]
    pub retry_delay_secs: u64,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Pool config from the arguments; migrations are off unless the caller
    /// turns them on.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            connect_attempts: self.connect_attempts.max(1),
            retry_delay: Duration::from_secs(self.retry_delay_secs),
            max_connections: self.max_connections.max(1),
            run_migrations: false,
            ..PoolConfig::new(&self.database_url)
        }
    }
}
