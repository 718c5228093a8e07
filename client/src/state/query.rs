//! Keyed query invalidation for backend-backed resources.
//!
//! DESIGN
//! ======
//! Each query key owns a reactive epoch counter. A resource fetcher calls
//! [`QueryClient::track`] for its key, which subscribes it to that counter
//! only; invalidating a key bumps its counter and the resource refetches.
//! Keys that no resource ever tracked have no counter and nothing to notify.
//!
//! Pages [`hold`](QueryClient::hold) the key they display. An epoch is
//! dropped when its last holder lets go, so the map only covers keys that
//! are on screen.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// One page of the board list.
    BoardList(usize),
    /// A single board entry.
    Board(i64),
}

#[derive(Clone, Debug)]
struct Epoch {
    counter: ArcRwSignal<u64>,
    holders: usize,
}

impl Epoch {
    fn new() -> Self {
        Self { counter: ArcRwSignal::new(0), holders: 0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct QueryClient {
    epochs: StoredValue<HashMap<QueryKey, Epoch>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self { epochs: StoredValue::new(HashMap::new()) }
    }

    fn epoch_signal(&self, key: &QueryKey) -> ArcRwSignal<u64> {
        let mut signal = None;
        self.epochs.update_value(|epochs| {
            signal = Some(epochs.entry(key.clone()).or_insert_with(Epoch::new).counter.clone());
        });
        signal.unwrap_or_else(|| ArcRwSignal::new(0))
    }

    /// Current epoch of `key`; subscribes the reactive caller to it.
    pub fn track(&self, key: &QueryKey) -> u64 {
        self.epoch_signal(key).get()
    }

    /// Mark `key` stale. Untracked keys have nothing to refresh.
    pub fn invalidate(&self, key: &QueryKey) {
        self.epochs.with_value(|epochs| {
            if let Some(epoch) = epochs.get(key) {
                epoch.counter.update(|n| *n += 1);
            }
        });
    }

    /// Mark every tracked key matching `predicate` stale.
    pub fn invalidate_where(&self, predicate: impl Fn(&QueryKey) -> bool) {
        self.epochs.with_value(|epochs| {
            for (key, epoch) in epochs {
                if predicate(key) {
                    epoch.counter.update(|n| *n += 1);
                }
            }
        });
    }

    /// Register one more holder of `key`.
    pub fn retain(&self, key: &QueryKey) {
        self.epochs.update_value(|epochs| {
            epochs.entry(key.clone()).or_insert_with(Epoch::new).holders += 1;
        });
    }

    /// Drop one holder of `key`; the epoch goes with the last one.
    pub fn release(&self, key: &QueryKey) {
        self.epochs.update_value(|epochs| {
            let Some(epoch) = epochs.get_mut(key) else {
                return;
            };
            epoch.holders = epoch.holders.saturating_sub(1);
            if epoch.holders == 0 {
                epochs.remove(key);
            }
        });
    }

    /// Number of keys with a live epoch.
    pub fn live_keys(&self) -> usize {
        self.epochs.with_value(HashMap::len)
    }

    /// Hold whichever key `key` yields for as long as the calling owner
    /// lives. When the key changes the previous one is released.
    pub fn hold(&self, key: impl Fn() -> Option<QueryKey> + 'static) {
        let client = *self;
        let held: Arc<Mutex<Option<QueryKey>>> = Arc::new(Mutex::new(None));

        let current = Arc::clone(&held);
        Effect::new(move || {
            let next = key();
            let Ok(mut held) = current.lock() else {
                return;
            };
            if *held == next {
                return;
            }
            if let Some(next) = &next {
                client.retain(next);
            }
            if let Some(previous) = held.take() {
                client.release(&previous);
            }
            *held = next;
        });

        on_cleanup(move || {
            if let Ok(mut held) = held.lock() {
                if let Some(previous) = held.take() {
                    client.release(&previous);
                }
            }
        });
    }

    pub fn invalidate_board_lists(&self) {
        self.invalidate_where(|key| matches!(key, QueryKey::BoardList(_)));
    }

    /// A board entry changed: its detail and every list page are stale.
    pub fn after_board_updated(&self, brd_id: i64) {
        self.invalidate(&QueryKey::Board(brd_id));
        self.invalidate_board_lists();
    }

    pub fn after_board_created(&self) {
        self.invalidate_board_lists();
    }

    pub fn after_board_deleted(&self, brd_id: i64) {
        self.invalidate(&QueryKey::Board(brd_id));
        self.invalidate_board_lists();
    }

    pub fn after_file_deleted(&self, brd_id: i64) {
        self.invalidate(&QueryKey::Board(brd_id));
    }
}
