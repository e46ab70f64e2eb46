use crate::models::IpRecord;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Pool sizing shared by both backends: 5 warm connections plus 10 overflow.
/// A checkout past the bound blocks up to `ACQUIRE_TIMEOUT` and then errors.
pub const BASE_POOL_SIZE: u32 = 5;
pub const MAX_OVERFLOW: u32 = 10;
pub const ACQUIRE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[async_trait]
pub trait Storage: Send + Sync {
    /// Initialize the storage (create the ip_records table if absent)
    async fn init(&self) -> Result<()>;

    /// Insert one observation inside its own transaction and commit.
    /// On failure the transaction is dropped, which rolls back and returns
    /// the connection to the pool.
    async fn record(&self, ip: &str, reversed_ip: &str) -> StorageResult<IpRecord>;

    /// Number of stored records (test support; not exposed over HTTP)
    async fn count(&self) -> Result<i64>;
}
