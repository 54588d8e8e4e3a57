//! Cari repository
//!
//! Inserts rely on the `UNIQUE (kod)` constraint; a violation comes back as
//! [`DbError::Duplicate`] instead of a pre-check query.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::NewCari;

/// Cari repository
pub struct CariRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CariRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a cari record and return its id.
    pub async fn insert(&self, cari: &NewCari) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO cari_main (kod, ad, tip, telefon, il, ilce)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(cari.kod.as_str())
        .bind(cari.ad.as_str())
        .bind(cari.tip.as_str())
        .bind(cari.telefon.as_deref())
        .bind(cari.il.as_deref())
        .bind(cari.ilce.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "cari", cari.kod.as_str()))
    }
}
