// ============================================================================
// RESPONSE CACHE - Per-collection and per-id entries with explicit invalidation
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::models::EntityId;

/// A cached value and when it was fetched
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) <= ttl
    }
}

/// Cache slot addressed by a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The `list()` result
    Collection,
    /// One `get_by_id()` result
    Item(EntityId),
}

/// Write operations a resource client performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update(EntityId),
    Delete(EntityId),
}

/// Invalidation table: which cached entries a successful mutation drops.
/// Scoped to the mutated entity's own cache; other entities are untouched.
pub fn invalidated_keys(mutation: Mutation) -> Vec<CacheKey> {
    match mutation {
        Mutation::Create => vec![CacheKey::Collection],
        Mutation::Update(id) => vec![CacheKey::Collection, CacheKey::Item(id)],
        Mutation::Delete(id) => vec![CacheKey::Collection, CacheKey::Item(id)],
    }
}

/// Entries are written only under the generation observed before the fetch
/// began; every invalidation bumps it, so a fetch that raced a mutation is
/// returned to its caller but never cached.
pub struct ResponseCache<T> {
    ttl: Duration,
    generation: u64,
    collection: Option<CacheEntry<Vec<T>>>,
    items: HashMap<EntityId, CacheEntry<T>>,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_seconds),
            generation: 0,
            collection: None,
            items: HashMap::new(),
        }
    }

    pub fn collection(&self) -> Option<Vec<T>> {
        let now = Utc::now();
        self.collection
            .as_ref()
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    pub fn item(&self, id: EntityId) -> Option<T> {
        let now = Utc::now();
        self.items
            .get(&id)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns false when an invalidation happened since `observed`
    pub fn store_collection(&mut self, observed: u64, values: Vec<T>) -> bool {
        if observed != self.generation {
            return false;
        }
        self.collection = Some(CacheEntry::new(values));
        true
    }

    pub fn store_item(&mut self, observed: u64, id: EntityId, value: T) -> bool {
        if observed != self.generation {
            return false;
        }
        self.items.insert(id, CacheEntry::new(value));
        true
    }

    pub fn invalidate(&mut self, key: CacheKey) {
        self.generation += 1;
        match key {
            CacheKey::Collection => self.collection = None,
            CacheKey::Item(id) => {
                self.items.remove(&id);
            }
        }
    }

    /// Apply the invalidation table for a completed mutation
    pub fn apply(&mut self, mutation: Mutation) {
        for key in invalidated_keys(mutation) {
            self.invalidate(key);
        }
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.collection = None;
        self.items.clear();
    }
}
