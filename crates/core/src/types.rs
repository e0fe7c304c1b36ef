/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Trip dates are plain calendar dates with no time-of-day or zone.
pub type CalendarDate = chrono::NaiveDate;
