//! Keyed cache for remote reads
//!
//! Every entry is addressed by the serialized request (e.g.
//! `["dashboard",{"startDate":"2025-01-01"}]`). Fresh entries are served
//! without a network call; entries unused for longer than the eviction window
//! are dropped. Failed fetches are never stored.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Age after which an entry is re-fetched on next use
    pub stale_time: Duration,
    /// Idle time after which an entry is dropped
    pub gc_time: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::minutes(5),
            gc_time: Duration::minutes(10),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
    last_used_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<V> {
    Fresh(V),
    /// Cached but past the staleness window
    Stale(V),
    Missing,
}

/// Build the cache key of a request: `[scope, params]` as JSON
pub fn cache_key<Q: Serialize>(scope: &str, params: &Q) -> String {
    let params = serde_json::to_value(params).unwrap_or(serde_json::Value::Null);
    serde_json::Value::Array(vec![serde_json::Value::from(scope), params]).to_string()
}

#[derive(Clone)]
pub struct QueryCache<V> {
    entries: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
    policy: CachePolicy,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(policy: CachePolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: CachePolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            policy,
            clock,
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Look up `key` and mark it as used
    pub fn lookup(&self, key: &str) -> CacheLookup<V> {
        let now = self.clock.now();
        let Ok(mut entries) = self.entries.lock() else {
            return CacheLookup::Missing;
        };
        Self::evict(&mut entries, now, self.policy.gc_time);

        match entries.get_mut(key) {
            Some(entry) => {
                entry.last_used_at = now;
                if now - entry.fetched_at < self.policy.stale_time {
                    CacheLookup::Fresh(entry.value.clone())
                } else {
                    CacheLookup::Stale(entry.value.clone())
                }
            }
            None => CacheLookup::Missing,
        }
    }

    pub fn insert(&self, key: &str, value: V) {
        let now = self.clock.now();
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    fetched_at: now,
                    last_used_at: now,
                },
            );
        }
    }

    /// Drop `key` so the next `fetch` goes to the network
    pub fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn evict_expired(&self) {
        let now = self.clock.now();
        if let Ok(mut entries) = self.entries.lock() {
            Self::evict(&mut entries, now, self.policy.gc_time);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serve `key` from cache while fresh, otherwise run `fetcher` and store
    /// its result under `key`. Errors pass through uncached.
    pub async fn fetch<F, Fut, E>(&self, key: &str, fetcher: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let CacheLookup::Fresh(value) = self.lookup(key) {
            log::debug!("query_cache: hit {}", key);
            return Ok(value);
        }

        log::debug!("query_cache: miss {}", key);
        let value = fetcher().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    fn evict(entries: &mut HashMap<String, CacheEntry<V>>, now: DateTime<Utc>, gc_time: Duration) {
        entries.retain(|_, entry| now - entry.last_used_at < gc_time);
    }
}

/// Identifies one request issued through a [`RequestTracker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    key: String,
}

impl RequestTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Decides whether a resolved response may still be shown.
///
/// Only the most recently issued ticket is current, so a slow response for an
/// old key can never replace the result of a newer one, whatever the
/// completion order.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, key: &str) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            key: key.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.id
    }
}

#[cfg(test)]
pub use self::manual_clock::ManualClock;

#[cfg(test)]
mod manual_clock {
    use super::Clock;
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Mutex;

    /// Clock that only moves when told to
    #[derive(Debug)]
    pub struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        pub fn advance(&self, by: Duration) {
            if let Ok(mut now) = self.now.lock() {
                *now += by;
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.lock().map(|now| *now).unwrap_or_else(|_| Utc::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 1, 7, 9, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_cache_key_is_value_based() {
        #[derive(Serialize)]
        struct Params {
            a: Option<&'static str>,
        }
        assert_eq!(cache_key("dashboard", &Params { a: Some("x") }), r#"["dashboard",{"a":"x"}]"#);
        assert_eq!(
            cache_key("dashboard", &Params { a: Some("x") }),
            cache_key("dashboard", &Params { a: Some("x") })
        );
        assert_ne!(
            cache_key("dashboard", &Params { a: Some("x") }),
            cache_key("dashboard", &Params { a: None })
        );
    }

    #[test]
    fn test_fresh_entry_skips_fetch() {
        let clock = clock();
        let cache = QueryCache::with_clock(CachePolicy::default(), clock.clone());
        let counter = Cell::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.set(calls.get() + 1);
            Ok::<_, String>(calls.get())
        };

        assert_eq!(block_on(cache.fetch("k", fetch)), Ok(1));
        clock.advance(Duration::minutes(4));
        assert_eq!(block_on(cache.fetch("k", fetch)), Ok(1));
        assert_eq!(calls.get(), 1);

        clock.advance(Duration::minutes(2));
        assert_eq!(block_on(cache.fetch("k", fetch)), Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_stale_lookup_still_returns_value() {
        let clock = clock();
        let cache = QueryCache::with_clock(CachePolicy::default(), clock.clone());
        cache.insert("k", 7);
        clock.advance(Duration::minutes(6));
        assert_eq!(cache.lookup("k"), CacheLookup::Stale(7));
    }

    #[test]
    fn test_idle_entries_are_evicted() {
        let clock = clock();
        let cache = QueryCache::with_clock(CachePolicy::default(), clock.clone());
        cache.insert("old", 1);
        cache.insert("used", 2);

        clock.advance(Duration::minutes(8));
        assert!(matches!(cache.lookup("used"), CacheLookup::Stale(2)));

        clock.advance(Duration::minutes(3));
        cache.evict_expired();
        assert_eq!(cache.lookup("old"), CacheLookup::Missing);
        assert!(matches!(cache.lookup("used"), CacheLookup::Stale(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache: QueryCache<u32> = QueryCache::with_clock(CachePolicy::default(), clock());
        let failed = block_on(cache.fetch("k", || async { Err::<u32, _>("offline") }));
        assert_eq!(failed, Err("offline"));
        assert!(cache.is_empty());

        let ok = block_on(cache.fetch("k", || async { Ok::<_, &str>(5) }));
        assert_eq!(ok, Ok(5));
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let cache = QueryCache::with_clock(CachePolicy::default(), clock());
        cache.insert("k", 1);
        cache.invalidate("k");
        assert_eq!(cache.lookup("k"), CacheLookup::Missing);
    }

    #[test]
    fn test_latest_ticket_wins() {
        let tracker = RequestTracker::new();
        let cache = QueryCache::with_clock(CachePolicy::default(), clock());

        let old = tracker.begin("a");
        let new = tracker.begin("b");

        // New request resolves first, old one afterwards
        cache.insert(new.key(), "B");
        assert!(tracker.is_current(&new));
        cache.insert(old.key(), "A");
        assert!(!tracker.is_current(&old));

        assert_eq!(cache.lookup("b"), CacheLookup::Fresh("B"));
        assert_eq!(cache.lookup("a"), CacheLookup::Fresh("A"));
    }
}
