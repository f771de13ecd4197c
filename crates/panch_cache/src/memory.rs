//! Process-local TTL cache, the fast tier checked before the persistent store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant as StdInstant};

use crate::key::CacheKey;
use crate::record::MonthRecord;

const DEFAULT_TTL_SECONDS: u64 = 3600;

struct Entry {
    record: MonthRecord,
    inserted_at: StdInstant,
}

/// In-memory memoizer with a fixed TTL, evicted lazily on `get`.
///
/// Never blocks detector execution: a miss here just means "compute it and
/// call `put`", it never triggers a database round trip on its own.
pub struct MemoryStore {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl MemoryStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_seconds),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<MonthRecord> {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.record.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: CacheKey, record: MonthRecord) {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        entries.insert(
            key,
            Entry {
                record,
                inserted_at: StdInstant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("memory store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECONDS)
    }
}
