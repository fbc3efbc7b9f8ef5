//! Repository for the `activities` table.

use activities_core::activity::{fold_name, ActivityFields, ActivityId, ValidatedPatch};
use activities_core::types::{ActivityDate, Timestamp};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::activity::{Activity, ActivitySummary};

/// Column list for `activities` queries.
const COLUMNS: &str = "\
    id, activity_name, location, activity_date, activity_time, \
    description, created_at, updated_at";

/// Row shape of `activities`; converted into [`Activity`] at the boundary.
#[derive(FromRow)]
struct ActivityRow {
    id: Uuid,
    activity_name: String,
    location: String,
    activity_date: ActivityDate,
    activity_time: String,
    description: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: ActivityId::from(row.id),
            activity_name: row.activity_name,
            location: row.location,
            date: row.activity_date,
            time: row.activity_time,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct SummaryRow {
    id: Uuid,
    activity_name: String,
}

impl From<SummaryRow> for ActivitySummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: ActivityId::from(row.id),
            activity_name: row.activity_name,
        }
    }
}

/// Provides data access for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity under the given id.
    ///
    /// `created_at` and `updated_at` come from the column defaults; `name_key`
    /// is the folded name used by [`ActivityRepo::find_by_name`].
    pub async fn create(
        pool: &PgPool,
        id: ActivityId,
        fields: &ActivityFields,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities \
                 (id, activity_name, name_key, location, activity_date, activity_time, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(id.as_uuid())
            .bind(&fields.activity_name)
            .bind(fold_name(&fields.activity_name))
            .bind(&fields.location)
            .bind(fields.date)
            .bind(&fields.time)
            .bind(&fields.description)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find an activity by its id.
    pub async fn find_by_id(pool: &PgPool, id: ActivityId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        let row = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Activity::from))
    }

    /// Find an activity whose name equals `name`, ignoring case.
    ///
    /// Matches on `name_key`, which is folded in Rust on write and here on
    /// read. Names are not unique; the earliest created match wins.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities \
             WHERE name_key = $1 \
             ORDER BY created_at, id \
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(fold_name(name))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Activity::from))
    }

    /// List every activity, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, ActivityRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Activity::from).collect())
    }

    /// List `{id, activity_name}` for every activity, sorted by name.
    ///
    /// Uses the `"C"` collation so ordering is byte-wise and independent of
    /// the database locale.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ActivitySummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT id, activity_name FROM activities \
             ORDER BY activity_name COLLATE \"C\", id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ActivitySummary::from).collect())
    }

    /// Partially update an activity.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `updated_at` is
    /// always refreshed and never moves backwards.
    pub async fn update(
        pool: &PgPool,
        id: ActivityId,
        patch: &ValidatedPatch,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET \
                 activity_name = COALESCE($2, activity_name), \
                 name_key = COALESCE($7, name_key), \
                 location = COALESCE($3, location), \
                 activity_date = COALESCE($4, activity_date), \
                 activity_time = COALESCE($5, activity_time), \
                 description = COALESCE($6, description), \
                 updated_at = GREATEST(now(), updated_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(id.as_uuid())
            .bind(&patch.activity_name)
            .bind(&patch.location)
            .bind(patch.date)
            .bind(&patch.time)
            .bind(&patch.description)
            .bind(patch.activity_name.as_deref().map(fold_name))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Activity::from))
    }

    /// Delete an activity by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: ActivityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
