/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date of an activity (no time zone).
pub type ActivityDate = chrono::NaiveDate;
