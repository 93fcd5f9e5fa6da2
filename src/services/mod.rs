pub mod error;
pub mod api_client;
pub mod cache_service;
pub mod resource_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod session_service;

#[cfg(test)]
pub mod testing;

pub use error::{ApiError, ApiResult};
pub use api_client::{ApiClient, GlooTransport, HttpTransport, Method};
pub use resource_service::{CompaniesClient, DepartmentsClient, EmployeesClient, Resource, ResourceClient};
pub use dashboard_service::DashboardClient;
pub use session_service::SessionController;

use std::rc::Rc;

use crate::config::AppConfig;
use crate::state::TokenStore;

/// Every client the views need, sharing one HTTP client and Token Store
pub struct Api<T: HttpTransport = GlooTransport> {
    pub session: TokenStore,
    pub auth: SessionController<T>,
    pub companies: Rc<CompaniesClient<T>>,
    pub departments: Rc<DepartmentsClient<T>>,
    pub employees: Rc<EmployeesClient<T>>,
    pub dashboard: Rc<DashboardClient<T>>,
}

impl Api<GlooTransport> {
    pub fn from_config(config: &AppConfig) -> Self {
        let session = TokenStore::from_browser(&config.session_storage_key);
        Self::new(config.backend_url(), GlooTransport, session, config.cache_ttl_seconds)
    }
}

impl<T: HttpTransport + 'static> Api<T> {
    pub fn new(base_url: &str, transport: T, session: TokenStore, cache_ttl_seconds: i64) -> Self {
        let http = Rc::new(ApiClient::new(base_url, transport, session.clone()));
        let api = Self {
            session: session.clone(),
            auth: SessionController::new(http.clone(), session.clone()),
            companies: Rc::new(ResourceClient::new(http.clone(), cache_ttl_seconds)),
            departments: Rc::new(ResourceClient::new(http.clone(), cache_ttl_seconds)),
            employees: Rc::new(ResourceClient::new(http.clone(), cache_ttl_seconds)),
            dashboard: Rc::new(DashboardClient::new(http, cache_ttl_seconds)),
        };
        api.clear_caches_on_logout();
        api
    }

    /// A new user must never see the previous user's cached rows
    fn clear_caches_on_logout(&self) {
        let companies = Rc::downgrade(&self.companies);
        let departments = Rc::downgrade(&self.departments);
        let employees = Rc::downgrade(&self.employees);
        let dashboard = Rc::downgrade(&self.dashboard);
        self.session.subscribe(move |session| {
            if session.is_authenticated() {
                return;
            }
            if let Some(client) = companies.upgrade() {
                client.clear_cache();
            }
            if let Some(client) = departments.upgrade() {
                client.clear_cache();
            }
            if let Some(client) = employees.upgrade() {
                client.clear_cache();
            }
            if let Some(client) = dashboard.upgrade() {
                client.clear_cache();
            }
        });
    }
}
