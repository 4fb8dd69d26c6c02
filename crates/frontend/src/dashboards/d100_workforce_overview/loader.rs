//! Dashboard report loading
//!
//! Couples the report cache with a request tracker: every filter change
//! issues a new request, responses are cached under their own query key and
//! only the latest request's result is handed back for display.

use crate::shared::api_utils::ApiError;
use crate::shared::query_cache::{cache_key, CachePolicy, Clock, QueryCache, RequestTicket, RequestTracker};
use contracts::dashboards::d100_workforce_overview::{DashboardQuery, DashboardResponse};
use std::future::Future;
use std::sync::Arc;

const CACHE_SCOPE: &str = "dashboard";

/// One issued report request
#[derive(Debug, Clone)]
pub struct DashboardRequest {
    pub query: DashboardQuery,
    ticket: RequestTicket,
}

impl DashboardRequest {
    pub fn key(&self) -> &str {
        self.ticket.key()
    }
}

#[derive(Clone)]
pub struct DashboardLoader {
    cache: QueryCache<DashboardResponse>,
    tracker: RequestTracker,
}

impl DashboardLoader {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            cache: QueryCache::new(policy),
            tracker: RequestTracker::new(),
        }
    }

    pub fn with_clock(policy: CachePolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: QueryCache::with_clock(policy, clock),
            tracker: RequestTracker::new(),
        }
    }

    pub fn cache_key(query: &DashboardQuery) -> String {
        cache_key(CACHE_SCOPE, query)
    }

    /// Register `query` as the latest request
    pub fn request(&self, query: DashboardQuery) -> DashboardRequest {
        let ticket = self.tracker.begin(&Self::cache_key(&query));
        DashboardRequest { query, ticket }
    }

    /// Resolve a request through the cache.
    ///
    /// Returns `None` when a newer request was issued meanwhile; the response
    /// is still cached under its own key.
    pub async fn resolve<F, Fut>(
        &self,
        request: DashboardRequest,
        fetch: F,
    ) -> Option<Result<DashboardResponse, ApiError>>
    where
        F: FnOnce(DashboardQuery) -> Fut,
        Fut: Future<Output = Result<DashboardResponse, ApiError>>,
    {
        let query = request.query.clone();
        let result = self
            .cache
            .fetch(request.key(), move || fetch(query))
            .await;

        if !self.tracker.is_current(&request.ticket) {
            log::debug!("dashboard: dropping superseded response {}", request.key());
            return None;
        }
        if let Err(err) = &result {
            log::error!("Failed to load dashboard: {}", err);
        }
        Some(result)
    }

    /// Force the next request for `query` to hit the network
    pub fn invalidate(&self, query: &DashboardQuery) {
        self.cache.invalidate(&Self::cache_key(query));
    }
}
