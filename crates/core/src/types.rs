/// All primary keys are UUIDs generated by the application.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a new row.
///
/// UUIDv7: identifiers sort roughly by creation time.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
