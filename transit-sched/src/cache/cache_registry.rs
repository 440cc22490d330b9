use super::build_observer::{BuildObserver, CancellationToken};
use super::build_ops::{self, BuildResult};
use super::schedule_cache::ScheduleCache;
use crate::schedule_error::ScheduleError;
use crate::store::ScheduleStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// process-wide map from a schedule-source key (typically the dataset path)
/// to its built cache. readers snapshot the current `Arc` handle before use;
/// writers publish a replacement handle and never touch a published cache.
/// multiple keys can hold caches at once, one per open network.
#[derive(Default)]
pub struct CacheRegistry {
    caches: RwLock<HashMap<String, Arc<ScheduleCache>>>,
}

impl CacheRegistry {
    pub fn new() -> CacheRegistry {
        CacheRegistry {
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// snapshots the current cache handle for a key, if one was published.
    pub fn get(&self, key: &str) -> Option<Arc<ScheduleCache>> {
        let guard = self.caches.read().unwrap_or_else(|e| e.into_inner());
        guard.get(key).cloned()
    }

    /// publishes a cache for a key, replacing any previous handle. readers
    /// holding the old handle keep a valid cache until they drop it.
    pub fn publish(&self, key: &str, cache: Arc<ScheduleCache>) {
        let mut guard = self.caches.write().unwrap_or_else(|e| e.into_inner());
        if guard.insert(String::from(key), cache).is_some() {
            log::info!("replaced schedule cache for '{key}'");
        }
    }

    pub fn evict(&self, key: &str) -> Option<Arc<ScheduleCache>> {
        let mut guard = self.caches.write().unwrap_or_else(|e| e.into_inner());
        guard.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        let guard = self.caches.read().unwrap_or_else(|e| e.into_inner());
        guard.contains_key(key)
    }

    /// readies a cache for one evaluation cycle. an existing cache is reused
    /// unless `rebuild` forces a fresh build (the cache-on-every-solve
    /// policy, applied once per cycle, not once per edge query).
    ///
    /// a cancelled build leaves any previously published cache in place and
    /// returns it; `Ok(None)` means the build was cancelled before a first
    /// cache ever existed for this key.
    pub fn prepare<S: ScheduleStore>(
        &self,
        key: &str,
        store: &S,
        rebuild: bool,
        observer: &mut dyn BuildObserver,
        cancel: &CancellationToken,
    ) -> Result<Option<Arc<ScheduleCache>>, ScheduleError> {
        if !rebuild {
            if let Some(cache) = self.get(key) {
                return Ok(Some(cache));
            }
        }
        match build_ops::build(store, observer, cancel)? {
            BuildResult::Built(cache) => {
                let cache = Arc::new(cache);
                self.publish(key, cache.clone());
                Ok(Some(cache))
            }
            BuildResult::Cancelled => {
                log::info!("schedule cache build for '{key}' was cancelled");
                Ok(self.get(key))
            }
        }
    }
}
