use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Visit counter row for one caller-supplied user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VisitRecord {
    #[sqlx(rename = "id")]
    pub user_id: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column encoding for `created_at` / `updated_at`.
///
/// Fixed width with a trailing `Z`, so SQLite string comparison orders
/// timestamps chronologically.
pub fn encode_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
