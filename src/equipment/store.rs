// Storage contract for the equipment table.
//
// The repository only talks to the database through this trait so that
// failure paths can be exercised with mocks.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use super::model::Equipment;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },
}

/// Driver operations the equipment repository relies on.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Read every row, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<Equipment>, StoreError>;

    /// Read one row without holding anything open afterwards.
    async fn fetch_by_id(&self, id: i64) -> Result<Option<Equipment>, StoreError>;

    /// Insert a row and return the id the database generated for it.
    async fn insert(&self, equipment: &Equipment) -> Result<i64, StoreError>;

    /// Overwrite every column of the row with `equipment.id`. Returns rows affected.
    async fn update(&self, equipment: &Equipment) -> Result<u64, StoreError>;

    /// Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Highest id present, `None` on an empty table.
    async fn max_id(&self) -> Result<Option<i64>, StoreError>;

    /// Last id handed out by the auto-increment counter, `None` if it never ran.
    async fn current_sequence(&self) -> Result<Option<i64>, StoreError>;

    /// Set the counter so the next insert receives `value + 1`.
    async fn reset_sequence(&self, value: i64) -> Result<(), StoreError>;
}
