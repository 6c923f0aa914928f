//! The log record type and its CSV column order.

use crate::generators::timestamp::format_timestamp;
use chrono::{DateTime, Utc};

/// Column header, in file order.
pub const HEADER: [&str; 7] = [
    "id",
    "created_at",
    "updated_at",
    "username_md5",
    "first_name",
    "last_name",
    "bio",
];

/// One generated row of the log file.
///
/// The fields are mutually consistent: `username_md5` derives from the name
/// pair and the id, the bio repeats the name pair and the id, and
/// `updated_at` never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username_md5: String,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub bio: String,
}

impl LogRecord {
    /// Serialize the record into `HEADER` column order.
    pub fn to_csv_record(&self) -> [String; 7] {
        [
            self.id.to_string(),
            format_timestamp(&self.created_at),
            format_timestamp(&self.updated_at),
            self.username_md5.clone(),
            self.first_name.to_string(),
            self.last_name.to_string(),
            self.bio.clone(),
        ]
    }
}
