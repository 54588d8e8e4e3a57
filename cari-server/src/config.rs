//! Pool configuration and DSN normalization

use std::time::Duration;

/// Maximum connections kept in the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Attempts made by the startup acquisition before handing off to the
/// background reconcile loop.
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 3;

/// Pool lifecycle configuration
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection string, already passed through [`ensure_sslmode`]
    pub database_url: String,

    pub max_connections: u32,
    pub min_connections: u32,

    /// Upper bound for establishing a connection when the pool is created
    pub acquire_timeout: Duration,

    /// Attempts made at startup (`acquire` with `max_attempts`)
    pub connect_attempts: u32,

    /// Sleep between startup attempts
    pub retry_delay: Duration,

    /// Sleep between background reconcile attempts
    pub reconcile_interval: Duration,

    /// Apply the schema once a pool is acquired
    pub run_migrations: bool,
}

impl PoolConfig {
    /// Build a config for `database_url` with default limits.
    ///
    /// The URL gets `sslmode=require` appended when it does not carry an
    /// sslmode of its own.
    pub fn new(database_url: &str) -> Self {
        Self {
            database_url: ensure_sslmode(database_url.trim()),
            ..Self::default()
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            retry_delay: Duration::from_secs(2),
            reconcile_interval: Duration::from_secs(10),
            run_migrations: true,
        }
    }
}

/// Append `sslmode=require` to a DSN that does not already set an sslmode.
///
/// Empty input is returned unchanged so that the caller can still report
/// the missing `DATABASE_URL`.
pub fn ensure_sslmode(url: &str) -> String {
    if url.is_empty() || url.to_ascii_lowercase().contains("sslmode=") {
        return url.to_owned();
    }

    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}sslmode=require")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_sslmode_without_query() {
        assert_eq!(
            ensure_sslmode("postgres://u:p@db.example.com/cari"),
            "postgres://u:p@db.example.com/cari?sslmode=require"
        );
    }

    #[test]
    fn appends_sslmode_to_existing_query() {
        assert_eq!(
            ensure_sslmode("postgres://db/cari?application_name=cari"),
            "postgres://db/cari?application_name=cari&sslmode=require"
        );
    }

    #[test]
    fn keeps_existing_sslmode_any_case() {
        let url = "postgres://db/cari?SSLMode=disable";
        assert_eq!(ensure_sslmode(url), url);

        let url = "postgres://db/cari?sslmode=verify-full";
        assert_eq!(ensure_sslmode(url), url);
    }

    #[test]
    fn empty_url_stays_empty() {
        assert_eq!(ensure_sslmode(""), "");
    }

    #[test]
    fn default_has_no_database_url() {
        assert_eq!(PoolConfig::default().database_url, "");
    }

    #[test]
    fn new_trims_and_normalizes() {
        let config = PoolConfig::new("  postgres://db/cari \n");
        assert_eq!(config.database_url, "postgres://db/cari?sslmode=require");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connect_attempts, 3);
        assert_eq!(config.reconcile_interval, Duration::from_secs(10));
    }
}
