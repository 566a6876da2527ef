// src/services/db.rs
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

use crate::models::{StoredRow, ValuationResult};
use crate::BoxError;

// No key and no uniqueness: every run appends a row.
const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS dcf_results (
    ticker TEXT,
    run_date TEXT,
    ocf REAL,
    capex REAL,
    growth_rate REAL,
    discount_rate REAL,
    perp_growth_rate REAL,
    shares_outstanding REAL,
    intrinsic_value REAL
)
"#;

/// Append-only store of valuation runs backed by a single SQLite connection.
pub struct DcfStore {
    conn: SqliteConnection,
}

impl DcfStore {
    /// Opens (creating if needed) the database file and ensures the table exists.
    pub async fn open(path: &Path) -> Result<Self, BoxError> {
        let mut conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await?;

        sqlx::query(CREATE_TABLE_SQL).execute(&mut conn).await?;
        info!("Opened result store at {}", path.display());

        Ok(Self { conn })
    }

    /// Opens an existing database without creating or altering anything.
    pub async fn open_existing(path: &Path) -> Result<Self, BoxError> {
        let conn = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .connect()
            .await?;

        info!("Opened result store at {} (read-only)", path.display());
        Ok(Self { conn })
    }

    pub async fn record(&mut self, result: &ValuationResult) -> Result<(), BoxError> {
        let mut tx = self.conn.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO dcf_results VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(result.ticker.as_str())
        .bind(result.run_date)
        .bind(result.ocf)
        .bind(result.capex)
        .bind(result.growth_rate)
        .bind(result.discount_rate)
        .bind(result.perp_growth_rate)
        .bind(result.shares_outstanding)
        .bind(result.intrinsic_value)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        info!("Saved valuation for {} ({})", result.ticker, result.run_date);
        Ok(())
    }

    /// Every stored row exactly as the table holds it, oldest first.
    pub async fn all_results(&mut self) -> Result<Vec<StoredRow>, BoxError> {
        let rows = sqlx::query_as::<_, StoredRow>(
            "SELECT * FROM dcf_results ORDER BY rowid",
        )
        .fetch_all(&mut self.conn)
        .await?;

        info!("Read {} stored valuations", rows.len());
        Ok(rows)
    }

    pub async fn close(self) -> Result<(), BoxError> {
        self.conn.close().await?;
        Ok(())
    }
}
