use chrono::{Duration, Utc};
use std::cell::RefCell;

use crate::models::DashboardSummary;
use crate::utils::DASHBOARD_PATH;

use super::api_client::{GlooTransport, HttpTransport, SharedClient};
use super::cache_service::CacheEntry;
use super::error::ApiResult;

/// Read-only analytics query
pub struct DashboardClient<T: HttpTransport = GlooTransport> {
    http: SharedClient<T>,
    ttl: Duration,
    cache: RefCell<Option<CacheEntry<DashboardSummary>>>,
}

impl<T: HttpTransport> DashboardClient<T> {
    pub fn new(http: SharedClient<T>, cache_ttl_seconds: i64) -> Self {
        Self {
            http,
            ttl: Duration::seconds(cache_ttl_seconds),
            cache: RefCell::new(None),
        }
    }

    /// `GET /dashboard/`, cached for the configured TTL
    pub async fn summary(&self) -> ApiResult<DashboardSummary> {
        let cached = self
            .cache
            .borrow()
            .as_ref()
            .filter(|entry| entry.is_fresh(Utc::now(), self.ttl))
            .map(|entry| entry.value.clone());
        if let Some(summary) = cached {
            return Ok(summary);
        }

        let summary: DashboardSummary = self.http.get_json(DASHBOARD_PATH).await?;
        log::info!(
            "📊 [DASHBOARD] {} companies, {} departments, {} employees",
            summary.total_companies,
            summary.total_departments,
            summary.total_employees
        );
        *self.cache.borrow_mut() = Some(CacheEntry::new(summary.clone()));
        Ok(summary)
    }

    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = None;
    }
}
