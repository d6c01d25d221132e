//! Time-bounded prediction cache.
//!
//! Keys are `lowercase(query) + "_" + types`. Entries are valid for a fixed TTL
//! and ignored (not deleted) once stale. The cache holds at most `capacity`
//! entries and evicts the oldest-inserted key past that, regardless of how
//! recently it was read.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tokio::time::Instant;

use crate::config::{CACHE_MAX_ENTRIES, CACHE_TTL};
use crate::models::Prediction;

#[derive(Debug, Clone)]
struct CacheEntry {
    predictions: Vec<Prediction>,
    inserted_at: Instant,
}

/// Per-widget result cache with insertion-order eviction.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    insertion_order: VecDeque<String>,
    ttl: Duration,
    capacity: usize,
}

impl ResultCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        ResultCache {
            entries: HashMap::with_capacity(capacity + 1),
            insertion_order: VecDeque::with_capacity(capacity + 1),
            ttl,
            capacity,
        }
    }

    /// Cache key for a query and type filter.
    pub fn key(query: &str, types: &str) -> String {
        format!("{}_{}", query.to_lowercase(), types)
    }

    /// Returns the cached predictions if present and younger than the TTL.
    pub fn get(&self, query: &str, types: &str) -> Option<&[Prediction]> {
        let key = Self::key(query, types);
        match self.entries.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                log::debug!("Cache HIT for key: {}", key);
                Some(&entry.predictions)
            }
            Some(_) => {
                log::debug!("Cache EXPIRED for key: {}", key);
                None
            }
            None => {
                log::debug!("Cache MISS for key: {}", key);
                None
            }
        }
    }

    /// Inserts or overwrites an entry.
    ///
    /// Overwriting keeps the key's original insertion position.
    pub fn put(&mut self, query: &str, types: &str, predictions: Vec<Prediction>) {
        let key = Self::key(query, types);
        let entry = CacheEntry {
            predictions,
            inserted_at: Instant::now(),
        };
        if self.entries.insert(key.clone(), entry).is_none() {
            self.insertion_order.push_back(key);
        }

        while self.entries.len() > self.capacity {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    log::debug!("Cache EVICT for key: {}", oldest);
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    /// Number of stored entries, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `key` is stored, stale or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(CACHE_TTL, CACHE_MAX_ENTRIES)
    }
}
