use activities_core::activity::{names_match, ActivityFields, ActivityId, ValidatedPatch};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ActivityStore, StoreError};
use crate::models::activity::{Activity, ActivitySummary};

/// [`ActivityStore`] held entirely in process memory.
///
/// Records are kept in creation order, which gives name lookups the same
/// earliest-first tie breaking as the PostgreSQL store.
#[derive(Default)]
pub struct InMemoryActivityStore {
    records: RwLock<Vec<Activity>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn create(&self, fields: &ActivityFields) -> Result<Activity, StoreError> {
        let activity = Activity::new(ActivityId::generate(), fields.clone(), Utc::now());
        self.records.write().await.push(activity.clone());
        Ok(activity)
    }

    async fn find_by_id(&self, id: ActivityId) -> Result<Option<Activity>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|a| names_match(&a.activity_name, name))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Activity>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn list_summaries(&self) -> Result<Vec<ActivitySummary>, StoreError> {
        let mut summaries: Vec<ActivitySummary> = self
            .records
            .read()
            .await
            .iter()
            .map(Activity::summary)
            .collect();
        summaries.sort_by(|a, b| {
            a.activity_name
                .as_bytes()
                .cmp(b.activity_name.as_bytes())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(summaries)
    }

    async fn update(
        &self,
        id: ActivityId,
        patch: &ValidatedPatch,
    ) -> Result<Option<Activity>, StoreError> {
        let mut records = self.records.write().await;
        let Some(activity) = records.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        let mut fields = activity.fields();
        patch.apply_to(&mut fields);
        let updated = Activity {
            updated_at: Utc::now().max(activity.updated_at),
            ..Activity::new(activity.id, fields, activity.created_at)
        };
        *activity = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: ActivityId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|a| a.id != id);
        Ok(records.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
