//! Route handlers organized by resource

pub mod cari;
pub mod db_ping;
pub mod health;
