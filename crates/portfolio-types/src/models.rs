use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored guestbook entry. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePost {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post that passed boundary validation but has no id or timestamp yet.
///
/// Only [`crate::api::RawTimelinePost::validate`] builds one, so every value
/// of this type has a non-empty name and content and an email with an `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimelinePost {
    name: String,
    email: String,
    content: String,
}

impl NewTimelinePost {
    pub(crate) fn new(name: String, email: String, content: String) -> Self {
        Self { name, email, content }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Attach the storage-assigned id and creation time.
    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> TimelinePost {
        TimelinePost {
            id,
            name: self.name,
            email: self.email,
            content: self.content,
            created_at,
        }
    }
}
