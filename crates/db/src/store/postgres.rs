use activities_core::activity::{ActivityFields, ActivityId, ValidatedPatch};
use async_trait::async_trait;

use super::{ActivityStore, StoreError};
use crate::models::activity::{Activity, ActivitySummary};
use crate::repositories::ActivityRepo;
use crate::DbPool;

/// [`ActivityStore`] backed by the `activities` table.
#[derive(Clone)]
pub struct PgActivityStore {
    pool: DbPool,
}

impl PgActivityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn create(&self, fields: &ActivityFields) -> Result<Activity, StoreError> {
        Ok(ActivityRepo::create(&self.pool, ActivityId::generate(), fields).await?)
    }

    async fn find_by_id(&self, id: ActivityId) -> Result<Option<Activity>, StoreError> {
        Ok(ActivityRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        Ok(ActivityRepo::find_by_name(&self.pool, name).await?)
    }

    async fn list(&self) -> Result<Vec<Activity>, StoreError> {
        Ok(ActivityRepo::list(&self.pool).await?)
    }

    async fn list_summaries(&self) -> Result<Vec<ActivitySummary>, StoreError> {
        Ok(ActivityRepo::list_summaries(&self.pool).await?)
    }

    async fn update(
        &self,
        id: ActivityId,
        patch: &ValidatedPatch,
    ) -> Result<Option<Activity>, StoreError> {
        Ok(ActivityRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete(&self, id: ActivityId) -> Result<bool, StoreError> {
        Ok(ActivityRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
