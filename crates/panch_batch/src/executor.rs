//! Batch Executor: resolves a list of requested months against the
//! two-tier cache, computing only the misses, bounded by a semaphore.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Semaphore;

use panch_cache::{CacheKey, MemoryStore, MonthRecord, persistent};
use panch_ephemeris::Ayanamsa;
use panch_orchestrator::compute_monthly;

use crate::error::MonthError;

const DEFAULT_CONCURRENCY: usize = 6;

/// Map from a requested `month_start` string to either its computed
/// record or a per-month failure; one bad month never discards the rest.
pub type BatchResult = HashMap<String, Result<MonthRecord, MonthError>>;

/// Resolves batches of months against a process-local TTL store and an
/// optional persistent store, computing the remainder in parallel.
pub struct BatchExecutor {
    memory: MemoryStore,
    persistent: Option<PgPool>,
    concurrency: usize,
}

impl BatchExecutor {
    pub fn new(memory_ttl_seconds: u64, persistent: Option<PgPool>, concurrency: usize) -> Self {
        Self { memory: MemoryStore::new(memory_ttl_seconds), persistent, concurrency: concurrency.max(1) }
    }

    /// Compute (or retrieve from cache) every month in `month_starts` for
    /// one location and ayanamsa.
    #[tracing::instrument(skip(self, lat_deg, lon_deg), fields(tz = tz_name, requested = month_starts.len()))]
    pub async fn compute_months(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        tz_name: &str,
        month_starts: &[String],
        ayanamsa: Ayanamsa,
    ) -> BatchResult {
        let mut out = BatchResult::new();
        let mut misses = Vec::new();

        for month_start in month_starts {
            let key = CacheKey::new(lat_deg, lon_deg, tz_name, yyyy_mm(month_start), ayanamsa);

            if let Some(pool) = &self.persistent {
                // A persistent-store error degrades to "treat as a miss",
                // never aborts the month outright.
                if let Ok(Some(record)) = persistent::get(pool, &key).await {
                    self.memory.put(key, record.clone());
                    out.insert(month_start.clone(), Ok(record));
                    continue;
                }
            }

            if let Some(record) = self.memory.get(&key) {
                out.insert(month_start.clone(), Ok(record));
                continue;
            }

            misses.push((month_start.clone(), key));
        }

        if misses.is_empty() {
            tracing::debug!("batch fully served from cache");
            return out;
        }
        tracing::info!(misses = misses.len(), concurrency = self.concurrency, "computing cache misses");

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let tz_owned = tz_name.to_string();
        let mut handles = Vec::with_capacity(misses.len());

        for (month_start, key) in misses {
            let semaphore = Arc::clone(&semaphore);
            let tz_owned = tz_owned.clone();
            let month_start_for_task = month_start.clone();
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore never closes");
                let result = tokio::task::spawn_blocking(move || {
                    compute_monthly(lat_deg, lon_deg, &tz_owned, &month_start_for_task, ayanamsa)
                })
                .await;
                (month_start, key, result)
            }));
        }

        for handle in handles {
            let (month_start, key, joined) = handle.await.expect("batch task panicked");
            match joined {
                Ok(Ok(record)) => {
                    self.memory.put(key.clone(), record.clone());
                    if let Some(pool) = &self.persistent {
                        let _ = persistent::put(pool, &key, &record).await;
                    }
                    out.insert(month_start, Ok(record));
                }
                Ok(Err(orchestrator_err)) => {
                    tracing::warn!(month = %month_start, error = %orchestrator_err, "month computation failed");
                    out.insert(month_start, Err(MonthError::new(orchestrator_err.to_string())));
                }
                Err(join_err) => {
                    tracing::warn!(month = %month_start, error = %join_err, "month task panicked");
                    out.insert(month_start, Err(MonthError::new(join_err.to_string())));
                }
            }
        }

        out
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new(3600, None, DEFAULT_CONCURRENCY)
    }
}

fn yyyy_mm(month_start_iso: &str) -> String {
    month_start_iso.chars().take(7).collect()
}
