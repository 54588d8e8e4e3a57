//! cari-server: HTTP server for cari account records
//!
//! Exposes health checks, a database ping and a single insert endpoint
//! on top of a PostgreSQL pool that is acquired with bounded retry and
//! reconciled in the background while the database is unreachable.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ensure_sslmode, PoolConfig};
pub use db::{DbError, PoolManager};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
