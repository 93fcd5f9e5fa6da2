// ============================================================================
// RESOURCE CLIENTS - Typed CRUD per entity over the authenticated client
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::marker::PhantomData;

use crate::models::{
    Company, CompanyFields, Department, DepartmentFields, Employee, EmployeeFields, EntityId,
};

use super::api_client::{GlooTransport, HttpTransport, Method, SharedClient};
use super::cache_service::{Mutation, ResponseCache};
use super::error::{ApiError, ApiResult};

/// A backend collection exposed as `/<collection>/` and `/<collection>/{id}/`
pub trait Resource: 'static {
    /// Collection path segment, e.g. `companies`
    const COLLECTION: &'static str;
    /// Singular name for log lines
    const NAME: &'static str;

    type Entity: DeserializeOwned + Clone;
    type Fields: Serialize;
}

pub struct Companies;
pub struct Departments;
pub struct Employees;

impl Resource for Companies {
    const COLLECTION: &'static str = "companies";
    const NAME: &'static str = "company";
    type Entity = Company;
    type Fields = CompanyFields;
}

impl Resource for Departments {
    const COLLECTION: &'static str = "departments";
    const NAME: &'static str = "department";
    type Entity = Department;
    type Fields = DepartmentFields;
}

impl Resource for Employees {
    const COLLECTION: &'static str = "employees";
    const NAME: &'static str = "employee";
    type Entity = Employee;
    type Fields = EmployeeFields;
}

pub struct ResourceClient<R: Resource, T: HttpTransport = GlooTransport> {
    http: SharedClient<T>,
    cache: RefCell<ResponseCache<R::Entity>>,
    _resource: PhantomData<R>,
}

impl<R: Resource, T: HttpTransport> ResourceClient<R, T> {
    pub fn new(http: SharedClient<T>, cache_ttl_seconds: i64) -> Self {
        Self {
            http,
            cache: RefCell::new(ResponseCache::new(cache_ttl_seconds)),
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/{}/", R::COLLECTION)
    }

    fn item_path(id: EntityId) -> String {
        format!("/{}/{}/", R::COLLECTION, id)
    }

    // ========================================================================
    // READS - Concurrent misses for the same key each send their own GET.
    // No request coalescing; whichever finishes under the current generation
    // fills the cache.
    // ========================================================================

    pub async fn list(&self) -> ApiResult<Vec<R::Entity>> {
        let generation = {
            let cache = self.cache.borrow();
            if let Some(cached) = cache.collection() {
                log::debug!("💾 [CACHE] {} list served from cache", R::NAME);
                return Ok(cached);
            }
            cache.generation()
        };
        let rows: Vec<R::Entity> = self.http.get_json(&Self::collection_path()).await?;
        log::info!("📋 [{}] {} rows fetched", R::COLLECTION, rows.len());
        if !self.cache.borrow_mut().store_collection(generation, rows.clone()) {
            log::debug!("💾 [CACHE] {} list changed while fetching, not cached", R::NAME);
        }
        Ok(rows)
    }

    /// 404 surfaces as `ApiError::NotFound`
    pub async fn get_by_id(&self, id: EntityId) -> ApiResult<R::Entity> {
        let generation = {
            let cache = self.cache.borrow();
            if let Some(cached) = cache.item(id) {
                log::debug!("💾 [CACHE] {} {} served from cache", R::NAME, id);
                return Ok(cached);
            }
            cache.generation()
        };
        let entity: R::Entity = self.http.get_json(&Self::item_path(id)).await?;
        self.cache.borrow_mut().store_item(generation, id, entity.clone());
        Ok(entity)
    }

    pub async fn create(&self, fields: &R::Fields) -> ApiResult<R::Entity> {
        let created = self
            .http
            .send_json(Method::Post, &Self::collection_path(), fields)
            .await?;
        log::info!("✅ [{}] {} created", R::COLLECTION, R::NAME);
        self.cache.borrow_mut().apply(Mutation::Create);
        Ok(created)
    }

    /// Full replace (`PUT`)
    pub async fn update(&self, id: EntityId, fields: &R::Fields) -> ApiResult<R::Entity> {
        let updated = self
            .http
            .send_json(Method::Put, &Self::item_path(id), fields)
            .await?;
        log::info!("✅ [{}] {} {} updated", R::COLLECTION, R::NAME, id);
        self.cache.borrow_mut().apply(Mutation::Update(id));
        Ok(updated)
    }

    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.http.delete(&Self::item_path(id)).await?;
        log::info!("🗑️ [{}] {} {} deleted", R::COLLECTION, R::NAME, id);
        self.cache.borrow_mut().apply(Mutation::Delete(id));
        Ok(())
    }

    /// Drop every cached entry (used on logout)
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<T: HttpTransport> ResourceClient<Employees, T> {
    /// By-id fetch where "no such employee" is an empty result, not an error.
    /// Employees only see their own row, so another id comes back as 404.
    pub async fn find_by_id(&self, id: EntityId) -> ApiResult<Option<Employee>> {
        match self.get_by_id(id).await {
            Ok(employee) => Ok(Some(employee)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

pub type CompaniesClient<T = GlooTransport> = ResourceClient<Companies, T>;
pub type DepartmentsClient<T = GlooTransport> = ResourceClient<Departments, T>;
pub type EmployeesClient<T = GlooTransport> = ResourceClient<Employees, T>;
