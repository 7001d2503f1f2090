/// Document identifiers are assigned by the store and are opaque strings.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
