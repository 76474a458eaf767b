use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_types::{NewTimelinePost, TimelinePost};

use crate::models::normalize_timestamp;
use crate::store::TimelineStore;

/// Volatile timeline backend. Same contract as the SQLite one.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    posts: Vec<TimelinePost>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Memory store lock poisoned: {}", e))
    }
}

impl TimelineStore for MemoryStore {
    fn insert_post(&self, post: NewTimelinePost, created_at: DateTime<Utc>) -> Result<TimelinePost> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let stored = post.into_post(inner.last_id, normalize_timestamp(created_at));
        inner.posts.push(stored.clone());
        Ok(stored)
    }

    fn list_posts(&self) -> Result<Vec<TimelinePost>> {
        let mut posts = self.lock()?.posts.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    fn delete_oldest_post(&self) -> Result<Option<TimelinePost>> {
        let mut inner = self.lock()?;
        let oldest = inner
            .posts
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| (p.created_at, p.id))
            .map(|(idx, _)| idx);

        Ok(oldest.map(|idx| inner.posts.remove(idx)))
    }
}
