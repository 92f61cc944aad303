//! In-memory store of accepted demo requests

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use super::DemoRequest;

/// A demo request as received by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredDemoRequest {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: DemoRequest,
}

/// Default number of requests kept before the oldest are evicted
pub const DEFAULT_INBOX_CAPACITY: usize = 1000;

#[derive(Debug)]
struct InboxEntry {
    seq: u64,
    stored: StoredDemoRequest,
}

/// Shared inbox of demo requests, keyed by request id
///
/// Holds at most `capacity` requests; inserting into a full inbox evicts
/// the oldest one.
#[derive(Debug, Clone)]
pub struct DemoInbox {
    requests: Arc<DashMap<Uuid, InboxEntry>>,
    next_seq: Arc<AtomicU64>,
    capacity: usize,
}

impl Default for DemoInbox {
    fn default() -> Self {
        Self::bounded(DEFAULT_INBOX_CAPACITY)
    }
}

impl DemoInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inbox keeping at most `capacity` requests (at least one)
    pub fn bounded(capacity: usize) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a request and return the stored record
    pub fn insert(&self, request: DemoRequest) -> StoredDemoRequest {
        let stored = StoredDemoRequest {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            request,
        };
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.requests.insert(
            stored.id,
            InboxEntry {
                seq,
                stored: stored.clone(),
            },
        );
        self.evict_overflow();
        stored
    }

    pub fn get(&self, id: &Uuid) -> Option<StoredDemoRequest> {
        self.requests.get(id).map(|entry| entry.stored.clone())
    }

    /// Remove a request, e.g. when forwarding it failed
    pub fn remove(&self, id: &Uuid) -> Option<StoredDemoRequest> {
        self.requests.remove(id).map(|(_, entry)| entry.stored)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// All stored requests, oldest first
    pub fn list(&self) -> Vec<StoredDemoRequest> {
        let mut all: Vec<_> = self
            .requests
            .iter()
            .map(|entry| (entry.seq, entry.stored.clone()))
            .collect();
        all.sort_by_key(|(seq, _)| *seq);
        all.into_iter().map(|(_, stored)| stored).collect()
    }

    fn evict_overflow(&self) {
        while self.requests.len() > self.capacity {
            let oldest = self
                .requests
                .iter()
                .min_by_key(|entry| entry.seq)
                .map(|entry| *entry.key());
            match oldest {
                Some(id) => {
                    self.requests.remove(&id);
                }
                None => break,
            }
        }
    }
}
