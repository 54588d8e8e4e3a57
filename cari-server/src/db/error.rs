//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No pool is installed; the caller may retry once reconcile succeeds.
    #[error("database not connected")]
    Unavailable,

    #[error("duplicate {resource} '{key}'")]
    Duplicate { resource: &'static str, key: String },
}

impl DbError {
    /// Classify a driver error, turning unique violations (SQLSTATE 23505)
    /// into [`DbError::Duplicate`].
    pub fn from_insert(err: sqlx::Error, resource: &'static str, key: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Duplicate {
                    resource,
                    key: key.to_owned(),
                };
            }
        }
        Self::Sqlx(err)
    }
}
