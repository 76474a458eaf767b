use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::models::{NewTimelinePost, TimelinePost};

// -- Timeline posts --

/// Form body of `POST /api/timeline_post`. Every field may be absent.
#[derive(Debug, Clone, Default)]
pub struct RawTimelinePost {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

impl RawTimelinePost {
    /// Builds the record from decoded form fields. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = Self::default();
        for (key, value) in fields {
            let slot = match key.as_str() {
                "name" => &mut raw.name,
                "email" => &mut raw.email,
                "content" => &mut raw.content,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        raw
    }

    /// Checks name, then content, then email. The first failure wins.
    pub fn validate(self) -> Result<NewTimelinePost, TimelineError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(TimelineError::InvalidName)?;

        let content = self
            .content
            .filter(|c| !c.is_empty())
            .ok_or(TimelineError::InvalidContent)?;

        let email = self
            .email
            .filter(|e| e.contains('@'))
            .ok_or(TimelineError::InvalidEmail)?;

        Ok(NewTimelinePost::new(name, email, content))
    }
}

/// Body of `GET /api/timeline_post`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TimelinePostList {
    pub timeline_posts: Vec<TimelinePost>,
}

// -- Health --

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
