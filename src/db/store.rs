use async_trait::async_trait;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use super::models::Visit;

/// Failure reported by a store. `Display` is the backend's own message.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] SqlxError),

    #[error("{0}")]
    Backend(String),
}

/// Append-and-read access to the visit log.
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Append one visit.
    async fn insert(&self, visit: &Visit) -> Result<(), StoreError>;

    /// Newest visits first, at most `limit` of them.
    ///
    /// Ordered by timestamp descending; equal timestamps come back in reverse
    /// insertion order.
    async fn select_recent(&self, limit: u32) -> Result<Vec<Visit>, StoreError>;

    /// Create backing tables if needed.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
