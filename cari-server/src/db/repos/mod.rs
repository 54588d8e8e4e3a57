//! Repository implementations for database access
//!
//! Repositories borrow a `PgPool` that the caller cloned out of the
//! [`PoolManager`](super::PoolManager) slot.

pub mod cari;

pub use cari::CariRepo;
