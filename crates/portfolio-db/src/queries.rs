use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_types::{NewTimelinePost, TimelinePost};
use rusqlite::{Connection, Row};

use crate::Database;
use crate::models::{TimelinePostRow, format_timestamp, normalize_timestamp};

const POST_COLUMNS: &str = "id, name, email, content, created_at";

impl Database {
    // -- Timeline posts --

    pub fn insert_post(&self, post: NewTimelinePost, created_at: DateTime<Utc>) -> Result<TimelinePost> {
        let created_at = normalize_timestamp(created_at);
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO timeline_posts (name, email, content, created_at) VALUES (?1, ?2, ?3, ?4)",
                (post.name(), post.email(), post.content(), format_timestamp(created_at)),
            )?;
            let id = conn.last_insert_rowid();
            Ok(post.into_post(id, created_at))
        })
    }

    /// All posts, newest first. Equal timestamps list the later insert first.
    pub fn get_posts(&self) -> Result<Vec<TimelinePost>> {
        self.with_conn(query_posts)
    }

    /// Removes the post at the tail of the newest-first ordering, i.e. the oldest one.
    pub fn delete_oldest(&self) -> Result<Option<TimelinePost>> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let oldest = tx
                .query_row(
                    &format!(
                        "SELECT {POST_COLUMNS} FROM timeline_posts
                         ORDER BY created_at ASC, id ASC
                         LIMIT 1"
                    ),
                    [],
                    map_post_row,
                )
                .optional()?;

            let Some(row) = oldest else {
                return Ok(None);
            };

            tx.execute("DELETE FROM timeline_posts WHERE id = ?1", [row.id])?;
            tx.commit()?;

            Ok(Some(row.into_post()))
        })
    }
}

fn query_posts(conn: &Connection) -> Result<Vec<TimelinePost>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {POST_COLUMNS} FROM timeline_posts
         ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt
        .query_map([], map_post_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows.into_iter().map(TimelinePostRow::into_post).collect())
}

fn map_post_row(row: &Row<'_>) -> rusqlite::Result<TimelinePostRow> {
    Ok(TimelinePostRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        content: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
