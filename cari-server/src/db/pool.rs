//! Database connection pool lifecycle
//!
//! The pool lives in a shared slot that is either empty or holds exactly one
//! `PgPool`. Startup tries a bounded number of times; if that fails the
//! server keeps running and a detached task retries on a fixed interval
//! until a pool is installed. Handlers that find the slot empty fail fast
//! with [`DbError::Unavailable`].

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::{migrations, DbError};
use crate::config::PoolConfig;

/// Shared slot holding the current pool, if any.
pub type PoolSlot = Arc<RwLock<Option<PgPool>>>;

/// Create a PostgreSQL connection pool with default limits.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/cari").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&PoolConfig::new(database_url)).await
}

/// Create a PostgreSQL connection pool from a [`PoolConfig`].
pub async fn create_pool_with_options(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Run `connect` up to `max_attempts` times, sleeping `delay` between
/// attempts (never after the last one).
///
/// Returns the first successful handle, or `None` once attempts are
/// exhausted. Every failure is logged.
pub async fn acquire_with<T, E, F, Fut>(max_attempts: u32, delay: Duration, mut connect: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    for attempt in 1..=max_attempts {
        match connect().await {
            Ok(handle) => {
                tracing::info!(attempt, max_attempts, "PostgreSQL pool created");
                return Some(handle);
            }
            Err(e) => {
                tracing::error!(attempt, max_attempts, error = %e, "Failed to create database pool");
                if attempt < max_attempts && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    None
}

/// Try to create a pool for `config.database_url` with bounded retry.
pub async fn acquire(config: &PoolConfig, max_attempts: u32, delay: Duration) -> Option<PgPool> {
    if config.database_url.is_empty() {
        tracing::error!("DATABASE_URL is empty; set it in the environment");
        return None;
    }

    acquire_with(max_attempts, delay, || create_pool_with_options(config)).await
}

/// Owns the pool slot for the life of the process.
///
/// Cloning is cheap; all clones share the same slot.
#[derive(Clone)]
pub struct PoolManager {
    slot: PoolSlot,
    config: Arc<PoolConfig>,
}

impl PoolManager {
    /// Create a manager with an empty slot.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Clone the current pool out of the slot.
    pub async fn current(&self) -> Option<PgPool> {
        self.slot.read().await.clone()
    }

    /// Current pool, or [`DbError::Unavailable`] when the slot is empty.
    pub async fn pool(&self) -> Result<PgPool, DbError> {
        self.current().await.ok_or(DbError::Unavailable)
    }

    pub async fn is_connected(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Put `pool` into the slot.
    ///
    /// If a pool is already installed the new one is closed and `false` is
    /// returned, so at most one pool is ever live.
    pub async fn install(&self, pool: PgPool) -> bool {
        let mut slot = self.slot.write().await;
        if slot.is_some() {
            drop(slot);
            tracing::warn!("Pool already installed, closing duplicate");
            pool.close().await;
            return false;
        }
        *slot = Some(pool);
        true
    }

    async fn establish(&self, pool: PgPool) -> bool {
        if self.config.run_migrations {
            if let Err(e) = migrations::run(&pool).await {
                tracing::error!(error = %e, "Migrations failed, keeping pool");
            }
        }
        self.install(pool).await
    }

    /// Startup acquisition using the configured attempts and delay.
    pub async fn connect(&self) -> bool {
        match acquire(&self.config, self.config.connect_attempts, self.config.retry_delay).await {
            Some(pool) => self.establish(pool).await,
            None => false,
        }
    }

    /// Connect at startup; on failure detach a reconcile task and return its
    /// handle. The server keeps running either way.
    pub async fn connect_or_reconcile(&self) -> Option<JoinHandle<()>> {
        if self.connect().await {
            return None;
        }
        tracing::warn!("Starting without database, reconciling in background");
        Some(self.spawn_reconcile())
    }

    /// Detach [`PoolManager::reconcile`] onto the runtime.
    pub fn spawn_reconcile(&self) -> JoinHandle<()> {
        let manager = self.clone();
        tokio::spawn(async move { manager.reconcile().await })
    }

    /// Retry once per `reconcile_interval` until a pool is installed.
    pub async fn reconcile(&self) {
        self.reconcile_with(|| create_pool_with_options(&self.config))
            .await
    }

    /// Reconcile loop over an arbitrary connector.
    pub async fn reconcile_with<E, F, Fut>(&self, mut connect: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<PgPool, E>>,
        E: Display,
    {
        while !self.is_connected().await {
            tracing::info!(
                interval_secs = self.config.reconcile_interval.as_secs(),
                "Database connection failed, retrying after interval"
            );
            tokio::time::sleep(self.config.reconcile_interval).await;

            if let Some(pool) = acquire_with(1, Duration::ZERO, &mut connect).await {
                self.establish(pool).await;
            }
        }
        tracing::info!("Database pool available");
    }

    /// Take the pool out of the slot and close all its connections.
    ///
    /// Returns `false` (and does nothing) when the slot is already empty.
    pub async fn release(&self) -> bool {
        let pool = self.slot.write().await.take();
        match pool {
            Some(pool) => {
                pool.close().await;
                tracing::info!("PostgreSQL pool closed");
                true
            }
            None => {
                tracing::debug!("No pool to release");
                false
            }
        }
    }

    /// Run `SELECT 1` against the current pool.
    pub async fn ping(&self) -> Result<i32, DbError> {
        let pool = self.pool().await?;
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        Ok(value)
    }
}
