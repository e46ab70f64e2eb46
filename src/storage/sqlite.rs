use crate::models::IpRecord;
use crate::storage::trait_def::{ACQUIRE_TIMEOUT, BASE_POOL_SIZE, MAX_OVERFLOW};
use crate::storage::{Storage, StorageResult};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteStorage {
    pool: Arc<SqlitePool>,
}

impl SqliteStorage {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(BASE_POOL_SIZE + MAX_OVERFLOW)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ip_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ip TEXT NOT NULL,
                reversed_ip TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn record(&self, ip: &str, reversed_ip: &str) -> StorageResult<IpRecord> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, IpRecord>(
            r#"
            INSERT INTO ip_records (ip, reversed_ip)
            VALUES ($1, $2)
            RETURNING id, ip, reversed_ip
            "#,
        )
        .bind(ip)
        .bind(reversed_ip)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ip_records")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.0)
    }
}
