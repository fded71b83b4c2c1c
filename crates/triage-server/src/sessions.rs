use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// In-memory session values keyed by id.
///
/// A session untouched for longer than the idle TTL is dropped the next time
/// any session is stored, so memory is bounded by the sessions active within
/// one TTL window.
#[derive(Debug)]
pub struct Sessions<T> {
    entries: HashMap<Uuid, Entry<T>>,
    idle_ttl: Duration,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    touched: Instant,
}

impl<T> Sessions<T> {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            idle_ttl,
        }
    }

    /// Look up a session and mark it as used.
    pub fn get(&mut self, id: Uuid) -> Option<&T> {
        self.get_at(id, Instant::now())
    }

    /// Store a session, replacing any previous value under the same id.
    pub fn insert(&mut self, id: Uuid, value: T) -> Option<T> {
        self.insert_at(id, value, Instant::now())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_at(&mut self, id: Uuid, now: Instant) -> Option<&T> {
        let idle_ttl = self.idle_ttl;
        let entry = self.entries.get_mut(&id)?;
        if now.saturating_duration_since(entry.touched) > idle_ttl {
            return None;
        }
        entry.touched = now;
        Some(&entry.value)
    }

    fn insert_at(&mut self, id: Uuid, value: T, now: Instant) -> Option<T> {
        self.evict_idle(now);
        self.entries
            .insert(id, Entry { value, touched: now })
            .map(|entry| entry.value)
    }

    fn evict_idle(&mut self, now: Instant) {
        let idle_ttl = self.idle_ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.touched) <= idle_ttl);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = self.entries.len(), "idle sessions evicted");
        }
    }
}
