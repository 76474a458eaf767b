use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use portfolio_types::TimelinePost;
use tracing::warn;

/// Storage format of `created_at`. Fixed width, so text order is time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Database row type, mapping directly to a `timeline_posts` row.
pub struct TimelinePostRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: String,
}

impl TimelinePostRow {
    pub fn into_post(self) -> TimelinePost {
        let created_at = parse_timestamp(&self.created_at).unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on post {}: {}", self.created_at, self.id, e);
            DateTime::default()
        });

        TimelinePost {
            id: self.id,
            name: self.name,
            email: self.email,
            content: self.content,
            created_at,
        }
    }
}

/// Drops precision below microseconds so a stored value reads back unchanged.
pub fn normalize_timestamp(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    // %.f also accepts rows written without a fractional part
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|ndt| ndt.and_utc())
}
