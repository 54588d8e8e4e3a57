//! Database layer - pool lifecycle, schema and repositories
//!
//! # Design Principles
//!
//! - One pool (max 5 connections) held in a shared slot, present or absent
//! - Handlers clone the pool out of the slot, never hold the lock across a query
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{acquire, acquire_with, create_pool, create_pool_with_options, PoolManager, PoolSlot};
pub use repos::*;
