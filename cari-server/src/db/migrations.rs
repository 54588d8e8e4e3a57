//! Schema for the cari tables

use sqlx::PgPool;

/// Create the cari tables if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running cari migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cari_main (
            id BIGSERIAL PRIMARY KEY,
            kod TEXT NOT NULL UNIQUE,
            ad TEXT NOT NULL,
            tip TEXT NOT NULL,
            telefon TEXT,
            il TEXT,
            ilce TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("cari migrations complete");
    Ok(())
}
