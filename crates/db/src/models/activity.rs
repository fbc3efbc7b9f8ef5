//! Activity records as stored and returned over the wire.

use activities_core::activity::{ActivityFields, ActivityId};
use activities_core::types::{ActivityDate, Timestamp};
use serde::Serialize;

/// A stored activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub activity_name: String,
    pub location: String,
    pub date: ActivityDate,
    pub time: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Activity {
    /// Build a new record from validated fields.
    pub fn new(id: ActivityId, fields: ActivityFields, now: Timestamp) -> Self {
        Self {
            id,
            activity_name: fields.activity_name,
            location: fields.location,
            date: fields.date,
            time: fields.time,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// The five business fields, detached from identity and timestamps.
    pub fn fields(&self) -> ActivityFields {
        ActivityFields {
            activity_name: self.activity_name.clone(),
            location: self.location.clone(),
            date: self.date,
            time: self.time.clone(),
            description: self.description.clone(),
        }
    }

    pub fn summary(&self) -> ActivitySummary {
        ActivitySummary {
            id: self.id,
            activity_name: self.activity_name.clone(),
        }
    }
}

/// The `{id, activityName}` projection used by the summary listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub id: ActivityId,
    pub activity_name: String,
}
