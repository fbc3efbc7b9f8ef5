//! Activity identifier and inbound payload validation.
//!
//! Payloads arrive with every field optional so that a missing field is
//! reported as a validation failure with a readable message rather than a
//! deserialization error. [`NewActivity::validate`] and
//! [`ActivityPatch::validate`] turn them into the store-ready
//! [`ActivityFields`] and [`ValidatedPatch`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::ActivityDate;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Opaque identifier of a stored activity.
///
/// Backed by a UUIDv7 generated at creation time. The textual form is the
/// hyphenated lowercase UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Allocate a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ActivityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ActivityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| CoreError::InvalidIdentifier(format!("'{s}' is not a valid activity id")))
    }
}

// ---------------------------------------------------------------------------
// Validation messages
// ---------------------------------------------------------------------------

pub const MSG_ACTIVITY_NAME: &str = "Please enter activity name";
pub const MSG_LOCATION: &str = "Please enter location";
pub const MSG_DATE: &str = "Please enter date";
pub const MSG_DATE_INVALID: &str = "Please enter a valid date";
pub const MSG_TIME: &str = "Please enter time";
pub const MSG_DESCRIPTION: &str = "Please enter description";

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body of a create request. Every field is required; see [`Self::validate`].
///
/// The PascalCase aliases accept payloads written against the legacy field
/// names (`ActivityName`, `Location`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(alias = "ActivityName")]
    pub activity_name: Option<String>,
    #[serde(alias = "Location")]
    pub location: Option<String>,
    #[serde(alias = "Date")]
    pub date: Option<String>,
    #[serde(alias = "Time")]
    pub time: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
}

/// Body of an update request. Absent (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    #[serde(alias = "ActivityName")]
    pub activity_name: Option<String>,
    #[serde(alias = "Location")]
    pub location: Option<String>,
    #[serde(alias = "Date")]
    pub date: Option<String>,
    #[serde(alias = "Time")]
    pub time: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
}

/// The five business fields of an activity, all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFields {
    pub activity_name: String,
    pub location: String,
    pub date: ActivityDate,
    pub time: String,
    pub description: String,
}

/// A partial update whose provided fields have all passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedPatch {
    pub activity_name: Option<String>,
    pub location: Option<String>,
    pub date: Option<ActivityDate>,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl NewActivity {
    /// Check that every required field is present and non-blank.
    ///
    /// All failing fields are reported together, joined by `"; "`.
    pub fn validate(self) -> Result<ActivityFields, CoreError> {
        let mut problems = Vec::new();

        let activity_name = required_text(self.activity_name, MSG_ACTIVITY_NAME, &mut problems);
        let location = required_text(self.location, MSG_LOCATION, &mut problems);
        let date = required_date(self.date, &mut problems);
        let time = required_text(self.time, MSG_TIME, &mut problems);
        let description = required_text(self.description, MSG_DESCRIPTION, &mut problems);

        let (Some(activity_name), Some(location), Some(date), Some(time), Some(description)) =
            (activity_name, location, date, time, description)
        else {
            return Err(CoreError::Validation(problems.join("; ")));
        };

        Ok(ActivityFields {
            activity_name,
            location,
            date,
            time,
            description,
        })
    }
}

impl ActivityPatch {
    /// Check that no provided field would blank out a required value.
    pub fn validate(self) -> Result<ValidatedPatch, CoreError> {
        let mut problems = Vec::new();

        let patch = ValidatedPatch {
            activity_name: optional_text(self.activity_name, MSG_ACTIVITY_NAME, &mut problems),
            location: optional_text(self.location, MSG_LOCATION, &mut problems),
            date: self
                .date
                .and_then(|raw| required_date(Some(raw), &mut problems)),
            time: optional_text(self.time, MSG_TIME, &mut problems),
            description: optional_text(self.description, MSG_DESCRIPTION, &mut problems),
        };

        if problems.is_empty() {
            Ok(patch)
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }
}

impl ValidatedPatch {
    pub fn is_empty(&self) -> bool {
        self.activity_name.is_none()
            && self.location.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.description.is_none()
    }

    /// Merge the provided fields over `current`.
    pub fn apply_to(&self, current: &mut ActivityFields) {
        if let Some(name) = &self.activity_name {
            current.activity_name = name.clone();
        }
        if let Some(location) = &self.location {
            current.location = location.clone();
        }
        if let Some(date) = self.date {
            current.date = date;
        }
        if let Some(time) = &self.time {
            current.time = time.clone();
        }
        if let Some(description) = &self.description {
            current.description = description.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lookup key for an activity name: the full Unicode lowercase form.
///
/// Every store compares names through this key, so case folding does not
/// depend on a database locale.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive exact comparison used for name lookups.
pub fn names_match(stored: &str, query: &str) -> bool {
    fold_name(stored) == fold_name(query)
}

/// Parse an activity date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are converted to UTC before the date part is taken.
pub fn parse_activity_date(raw: &str) -> Option<ActivityDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required_text(
    value: Option<String>,
    message: &'static str,
    problems: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !is_blank(&v) => Some(v),
        _ => {
            problems.push(message);
            None
        }
    }
}

fn optional_text(
    value: Option<String>,
    message: &'static str,
    problems: &mut Vec<&'static str>,
) -> Option<String> {
    let v = value?;
    if is_blank(&v) {
        problems.push(message);
        return None;
    }
    Some(v)
}

fn required_date(value: Option<String>, problems: &mut Vec<&'static str>) -> Option<ActivityDate> {
    match value {
        Some(raw) if !is_blank(&raw) => {
            let parsed = parse_activity_date(&raw);
            if parsed.is_none() {
                problems.push(MSG_DATE_INVALID);
            }
            parsed
        }
        _ => {
            problems.push(MSG_DATE);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
