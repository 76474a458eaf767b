use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_types::{NewTimelinePost, TimelinePost};

use crate::Database;

/// Persistence contract shared by every timeline backend.
///
/// Ordering is newest first: `created_at` descending, then `id` descending.
/// `delete_oldest_post` removes the tail of that ordering atomically.
pub trait TimelineStore: Send + Sync {
    fn insert_post(&self, post: NewTimelinePost, created_at: DateTime<Utc>) -> Result<TimelinePost>;

    fn list_posts(&self) -> Result<Vec<TimelinePost>>;

    /// Returns the removed post, or `None` when the store was empty.
    fn delete_oldest_post(&self) -> Result<Option<TimelinePost>>;
}

impl TimelineStore for Database {
    fn insert_post(&self, post: NewTimelinePost, created_at: DateTime<Utc>) -> Result<TimelinePost> {
        Database::insert_post(self, post, created_at)
    }

    fn list_posts(&self) -> Result<Vec<TimelinePost>> {
        self.get_posts()
    }

    fn delete_oldest_post(&self) -> Result<Option<TimelinePost>> {
        self.delete_oldest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use chrono::{Duration, TimeZone};
    use portfolio_types::api::RawTimelinePost;

    fn new_post(name: &str) -> NewTimelinePost {
        RawTimelinePost {
            name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            content: Some(format!("hello from {name}")),
        }
        .validate()
        .unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap()
    }

    fn names(posts: &[TimelinePost]) -> Vec<&str> {
        posts.iter().map(|p| p.name.as_str()).collect()
    }

    fn backends() -> Vec<(&'static str, Box<dyn TimelineStore>)> {
        vec![
            ("sqlite", Box::new(Database::open_in_memory().unwrap())),
            ("memory", Box::new(MemoryStore::new())),
        ]
    }

    #[test]
    fn empty_store_lists_nothing() {
        for (backend, store) in backends() {
            assert!(store.list_posts().unwrap().is_empty(), "{backend}");
        }
    }

    #[test]
    fn insert_assigns_increasing_ids_and_keeps_timestamp() {
        for (backend, store) in backends() {
            let a = store.insert_post(new_post("A"), t0()).unwrap();
            let b = store.insert_post(new_post("B"), t0()).unwrap();

            assert!(b.id > a.id, "{backend}");
            assert_eq!(a.created_at, t0(), "{backend}");
            assert_eq!(a.email, "a@example.com", "{backend}");
            assert_eq!(store.list_posts().unwrap().len(), 2, "{backend}");
        }
    }

    #[test]
    fn sub_microsecond_precision_is_dropped_on_every_backend() {
        let stamped = t0() + Duration::nanoseconds(123_456_789);
        let expected = t0() + Duration::microseconds(123_456);

        for (backend, store) in backends() {
            let created = store.insert_post(new_post("A"), stamped).unwrap();
            assert_eq!(created.created_at, expected, "{backend}");
            assert_eq!(store.list_posts().unwrap()[0].created_at, expected, "{backend}");
        }
    }

    #[test]
    fn list_is_newest_first() {
        for (backend, store) in backends() {
            store.insert_post(new_post("A"), t0()).unwrap();
            store.insert_post(new_post("B"), t0() + Duration::seconds(1)).unwrap();

            assert_eq!(names(&store.list_posts().unwrap()), ["B", "A"], "{backend}");
        }
    }

    #[test]
    fn list_orders_by_timestamp_before_id() {
        for (backend, store) in backends() {
            store.insert_post(new_post("Late"), t0() + Duration::minutes(5)).unwrap();
            store.insert_post(new_post("Early"), t0()).unwrap();

            assert_eq!(names(&store.list_posts().unwrap()), ["Late", "Early"], "{backend}");
        }
    }

    #[test]
    fn equal_timestamps_list_later_insert_first() {
        for (backend, store) in backends() {
            store.insert_post(new_post("First"), t0()).unwrap();
            store.insert_post(new_post("Second"), t0()).unwrap();

            assert_eq!(names(&store.list_posts().unwrap()), ["Second", "First"], "{backend}");
        }
    }

    // Deletion takes the tail of the newest-first list: the oldest post, not the latest.
    #[test]
    fn delete_removes_the_oldest_post() {
        for (backend, store) in backends() {
            store.insert_post(new_post("A"), t0()).unwrap();
            store.insert_post(new_post("B"), t0() + Duration::seconds(1)).unwrap();

            let removed = store.delete_oldest_post().unwrap().unwrap();
            assert_eq!(removed.name, "A", "{backend}");
            assert_eq!(names(&store.list_posts().unwrap()), ["B"], "{backend}");
        }
    }

    #[test]
    fn delete_with_equal_timestamps_removes_lowest_id() {
        for (backend, store) in backends() {
            let first = store.insert_post(new_post("First"), t0()).unwrap();
            store.insert_post(new_post("Second"), t0()).unwrap();

            let removed = store.delete_oldest_post().unwrap().unwrap();
            assert_eq!(removed.id, first.id, "{backend}");
        }
    }

    #[test]
    fn delete_on_empty_store_is_a_no_op() {
        for (backend, store) in backends() {
            assert!(store.delete_oldest_post().unwrap().is_none(), "{backend}");
            assert!(store.list_posts().unwrap().is_empty(), "{backend}");
        }
    }

    #[test]
    fn delete_removes_exactly_one_post_per_call() {
        for (backend, store) in backends() {
            for (i, name) in ["A", "B", "C"].into_iter().enumerate() {
                store.insert_post(new_post(name), t0() + Duration::seconds(i as i64)).unwrap();
            }

            let removed: Vec<String> = (0..4)
                .filter_map(|_| store.delete_oldest_post().unwrap())
                .map(|p| p.name)
                .collect();
            assert_eq!(removed, ["A", "B", "C"], "{backend}");
        }
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        for (backend, store) in backends() {
            let a = store.insert_post(new_post("A"), t0()).unwrap();
            store.delete_oldest_post().unwrap();
            let b = store.insert_post(new_post("B"), t0()).unwrap();
            assert!(b.id > a.id, "{backend}");
        }
    }

    #[test]
    fn repeated_lists_are_identical() {
        for (backend, store) in backends() {
            store.insert_post(new_post("A"), t0()).unwrap();
            store.insert_post(new_post("B"), t0() + Duration::seconds(1)).unwrap();

            assert_eq!(store.list_posts().unwrap(), store.list_posts().unwrap(), "{backend}");
        }
    }

    #[test]
    fn sqlite_posts_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_post(new_post("A"), t0()).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let posts = db.get_posts().unwrap();
        assert_eq!(names(&posts), ["A"]);
        assert_eq!(posts[0].created_at, t0());
    }

    #[test]
    fn concurrent_deletes_remove_distinct_posts() {
        use std::sync::Arc;

        let store: Arc<dyn TimelineStore> = Arc::new(Database::open_in_memory().unwrap());
        for i in 0..8 {
            store
                .insert_post(new_post(&format!("P{i}")), t0() + Duration::seconds(i))
                .unwrap();
        }

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.delete_oldest_post().unwrap().map(|p| p.id))
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().filter_map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(store.list_posts().unwrap().is_empty());
    }
}
