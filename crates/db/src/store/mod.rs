//! The activity store handle.
//!
//! Handlers receive an `Arc<dyn ActivityStore>` rather than a pool so the
//! same request code runs against PostgreSQL or the in-memory store.

use activities_core::activity::{ActivityFields, ActivityId, ValidatedPatch};
use async_trait::async_trait;

use crate::models::activity::{Activity, ActivitySummary};

mod memory;
mod postgres;

pub use memory::InMemoryActivityStore;
pub use postgres::PgActivityStore;

/// Infrastructure failure while talking to the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the failure means the store could not be reached at all,
    /// as opposed to a query that reached it and failed.
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::Database(err) => matches!(
                err,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
        }
    }
}

/// Durable storage of activities.
///
/// Lookups return `Ok(None)` (and `delete` returns `Ok(false)`) when no
/// record matches; `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Persist a new activity, assigning its id and timestamps.
    async fn create(&self, fields: &ActivityFields) -> Result<Activity, StoreError>;

    async fn find_by_id(&self, id: ActivityId) -> Result<Option<Activity>, StoreError>;

    /// Case-insensitive exact match on `activity_name`. When several records
    /// share the name, the earliest created one is returned.
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError>;

    /// Every activity, oldest first.
    async fn list(&self) -> Result<Vec<Activity>, StoreError>;

    /// `{id, activity_name}` of every activity, sorted byte-wise by name.
    async fn list_summaries(&self) -> Result<Vec<ActivitySummary>, StoreError>;

    /// Merge `patch` into the stored record and refresh `updated_at`.
    async fn update(
        &self,
        id: ActivityId,
        patch: &ValidatedPatch,
    ) -> Result<Option<Activity>, StoreError>;

    /// Hard-delete an activity. Returns `true` if one was removed.
    async fn delete(&self, id: ActivityId) -> Result<bool, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
