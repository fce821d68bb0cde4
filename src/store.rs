//! Read-through cache of each session's habit list.
//!
//! Entries are keyed by access token and only ever created from a successful
//! fetch, so tokens the remote service rejects leave nothing behind. Every
//! mutation stamps the token with a new tick of a store-wide clock; a cached
//! list is served only while it was fetched after the token's last mutation
//! and is younger than the TTL. The lock is never held across a fetch.

use crate::client::ApiClient;
use crate::errors::ClientError;
use crate::models::Habit;
use crate::session::Session;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use tracing::debug;

struct Entry {
    changed_at: u64,
    started_at: u64,
    fetched_at: Instant,
    habits: Arc<Vec<Habit>>,
}

impl Entry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.started_at >= self.changed_at && self.fetched_at.elapsed() < ttl
    }
}

#[derive(Default)]
struct Slots {
    clock: u64,
    // Latest mutation of any token that had no entry at the time.
    floor: u64,
    entries: HashMap<String, Entry>,
}

impl Slots {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Drops entries past the TTL, remembering their last mutation in `floor`.
    fn sweep(&mut self, ttl: Duration) {
        let mut floor = self.floor;
        self.entries.retain(|_, entry| {
            let keep = entry.fetched_at.elapsed() < ttl;
            if !keep {
                floor = floor.max(entry.changed_at);
            }
            keep
        });
        self.floor = floor;
    }
}

pub struct HabitStore {
    ttl: Duration,
    slots: Mutex<Slots>,
}

impl HabitStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(Slots::default()),
        }
    }

    pub async fn habits(
        &self,
        client: &ApiClient,
        session: &Session,
    ) -> Result<Arc<Vec<Habit>>, ClientError> {
        let started_at = {
            let slots = self.slots.lock().await;
            if let Some(entry) = slots.entries.get(&session.access_token) {
                if entry.is_fresh(self.ttl) {
                    return Ok(Arc::clone(&entry.habits));
                }
            }
            slots.clock
        };

        debug!(user = %session.user_id, "fetching habit list");
        let habits = Arc::new(client.list_habits(session).await?);

        let mut guard = self.slots.lock().await;
        let slots = &mut *guard;
        slots.sweep(self.ttl);
        let changed_at = slots
            .entries
            .get(&session.access_token)
            .map_or(slots.floor, |entry| entry.changed_at);
        if started_at >= changed_at {
            slots.entries.insert(
                session.access_token.clone(),
                Entry {
                    changed_at,
                    started_at,
                    fetched_at: Instant::now(),
                    habits: Arc::clone(&habits),
                },
            );
        } else {
            debug!(user = %session.user_id, "habit list changed during fetch; not cached");
        }

        Ok(habits)
    }

    /// Records a mutation; the next read goes back to the server.
    pub async fn mark_stale(&self, session: &Session) {
        let mut guard = self.slots.lock().await;
        let slots = &mut *guard;
        let now = slots.tick();
        match slots.entries.get_mut(&session.access_token) {
            Some(entry) => entry.changed_at = now,
            None => slots.floor = now,
        }
    }

    pub async fn forget(&self, session: &Session) {
        let mut slots = self.slots.lock().await;
        let now = slots.tick();
        slots.floor = now;
        slots.entries.remove(&session.access_token);
    }

    pub async fn is_fresh(&self, session: &Session) -> bool {
        let slots = self.slots.lock().await;
        slots
            .entries
            .get(&session.access_token)
            .is_some_and(|entry| entry.is_fresh(self.ttl))
    }

    /// Number of sessions with a cached list.
    pub async fn cached_sessions(&self) -> usize {
        self.slots.lock().await.entries.len()
    }
}
