use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use portfolio_db::TimelineStore;
use portfolio_types::api::RawTimelinePost;
use portfolio_types::{TimelineError, TimelinePost};

/// Result of [`Guestbook::delete_oldest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(TimelinePost),
    /// The store held no posts; nothing changed.
    Empty,
}

/// The timeline guestbook: create, list and delete over an injected store.
///
/// All three operations are blocking; async callers run them on the
/// blocking pool.
#[derive(Clone)]
pub struct Guestbook {
    store: Arc<dyn TimelineStore>,
}

impl Guestbook {
    pub fn new(store: Arc<dyn TimelineStore>) -> Self {
        Self { store }
    }

    /// Validates the raw fields, then persists the post stamped with the current time.
    pub fn create(&self, raw: RawTimelinePost) -> Result<TimelinePost, TimelineError> {
        let post = raw.validate()?;
        let stored = self.store.insert_post(post, Utc::now())?;
        debug!("Timeline post {} created by {}", stored.id, stored.name);
        Ok(stored)
    }

    pub fn list(&self) -> Result<Vec<TimelinePost>, TimelineError> {
        Ok(self.store.list_posts()?)
    }

    /// Removes the oldest post: the last entry of the newest-first list.
    pub fn delete_oldest(&self) -> Result<DeleteOutcome, TimelineError> {
        match self.store.delete_oldest_post()? {
            Some(post) => {
                debug!("Timeline post {} by {} deleted", post.id, post.name);
                Ok(DeleteOutcome::Deleted(post))
            }
            None => Ok(DeleteOutcome::Empty),
        }
    }
}
