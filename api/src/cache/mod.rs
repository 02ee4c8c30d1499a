//! Collection cache for the derived views.
//!
//! Whole collections are cached under a single key each and dropped by the
//! write paths through [`CollectionCache::invalidate`]. Every [`Mutation`]
//! declares the collections it makes stale. Entries also expire after the
//! configured TTL.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::db::DbError;
use crate::entity::{alerts, assets, assignments, employees, locations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Assets,
    Employees,
    Locations,
    Assignments,
    Alerts,
}

/// Write operations, each with the collections it invalidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    AssetWrite,
    AssetAssign,
    AssetReturn,
    BulkImport,
    EmployeeWrite,
    EmployeeOffboard,
    LocationWrite,
    AssignmentDelete,
    AlertWrite,
    LocationBackfill,
}

impl Mutation {
    pub fn invalidates(&self) -> &'static [Collection] {
        use Collection::*;
        match self {
            Mutation::AssetWrite => &[Assets, Locations, Employees],
            Mutation::AssetAssign | Mutation::AssetReturn => &[Assets, Assignments, Employees],
            Mutation::BulkImport => &[Assets, Locations],
            Mutation::EmployeeWrite => &[Employees, Locations],
            Mutation::EmployeeOffboard => &[Employees, Locations, Assets, Assignments],
            Mutation::LocationWrite => &[Locations, Assets, Employees],
            Mutation::AssignmentDelete => &[Assignments],
            Mutation::AlertWrite => &[Alerts],
            Mutation::LocationBackfill => &[Assets, Employees],
        }
    }
}

/// One cached collection. The generation counter is bumped on every
/// invalidation so a load that raced with a write is not stored.
struct Slot<T: Clone + Send + Sync + 'static> {
    entry: Cache<(), Arc<Vec<T>>>,
    generation: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> Slot<T> {
    fn new(ttl: Duration) -> Self {
        Self {
            entry: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            generation: AtomicU64::new(0),
        }
    }

    async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<Vec<T>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, DbError>>,
    {
        if let Some(hit) = self.entry.get(&()) {
            return Ok(hit);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let fresh = Arc::new(load().await?);
        if self.generation.load(Ordering::Acquire) == generation {
            self.entry.insert((), fresh.clone());
        }
        Ok(fresh)
    }

    fn clear(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entry.invalidate(&());
    }

    fn is_cached(&self) -> bool {
        self.entry.contains_key(&())
    }
}

/// Shared cache of the full collections
pub struct CollectionCache {
    assets: Slot<assets::Model>,
    employees: Slot<employees::Model>,
    locations: Slot<locations::Model>,
    assignments: Slot<assignments::Model>,
    alerts: Slot<alerts::Model>,
}

impl CollectionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            assets: Slot::new(ttl),
            employees: Slot::new(ttl),
            locations: Slot::new(ttl),
            assignments: Slot::new(ttl),
            alerts: Slot::new(ttl),
        }
    }

    pub async fn assets<F, Fut>(&self, load: F) -> Result<Arc<Vec<assets::Model>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<assets::Model>, DbError>>,
    {
        self.assets.get_or_load(load).await
    }

    pub async fn employees<F, Fut>(&self, load: F) -> Result<Arc<Vec<employees::Model>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<employees::Model>, DbError>>,
    {
        self.employees.get_or_load(load).await
    }

    pub async fn locations<F, Fut>(&self, load: F) -> Result<Arc<Vec<locations::Model>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<locations::Model>, DbError>>,
    {
        self.locations.get_or_load(load).await
    }

    pub async fn assignments<F, Fut>(
        &self,
        load: F,
    ) -> Result<Arc<Vec<assignments::Model>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<assignments::Model>, DbError>>,
    {
        self.assignments.get_or_load(load).await
    }

    /// Unresolved alerts
    pub async fn alerts<F, Fut>(&self, load: F) -> Result<Arc<Vec<alerts::Model>>, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<alerts::Model>, DbError>>,
    {
        self.alerts.get_or_load(load).await
    }

    pub fn invalidate(&self, mutation: Mutation) {
        tracing::debug!("Invalidating {:?} after {:?}", mutation.invalidates(), mutation);
        for collection in mutation.invalidates() {
            self.clear(*collection);
        }
    }

    pub fn clear(&self, collection: Collection) {
        match collection {
            Collection::Assets => self.assets.clear(),
            Collection::Employees => self.employees.clear(),
            Collection::Locations => self.locations.clear(),
            Collection::Assignments => self.assignments.clear(),
            Collection::Alerts => self.alerts.clear(),
        }
    }

    pub fn is_cached(&self, collection: Collection) -> bool {
        match collection {
            Collection::Assets => self.assets.is_cached(),
            Collection::Employees => self.employees.is_cached(),
            Collection::Locations => self.locations.is_cached(),
            Collection::Assignments => self.assignments.is_cached(),
            Collection::Alerts => self.alerts.is_cached(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{asset_at, location};
    use std::sync::atomic::AtomicUsize;

    fn cache() -> CollectionCache {
        CollectionCache::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let cache = cache();
        let loads = AtomicUsize::new(0);
        let counter = &loads;
        let load = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![asset_at("Office", None)])
        };

        let first = cache.assets(load).await.unwrap();
        let second = cache.assets(load).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(first[0].id, second[0].id);
    }

    #[tokio::test]
    async fn test_mutation_drops_declared_collections_only() {
        let cache = cache();
        cache.assets(|| async { Ok(vec![]) }).await.unwrap();
        cache.locations(|| async { Ok(vec![location("Office")]) }).await.unwrap();
        cache.alerts(|| async { Ok(vec![]) }).await.unwrap();

        cache.invalidate(Mutation::AssetWrite);

        assert!(!cache.is_cached(Collection::Assets));
        assert!(!cache.is_cached(Collection::Locations));
        assert!(cache.is_cached(Collection::Alerts));
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = cache();
        let result = cache
            .employees(|| async { Err(DbError::QueryError("boom".into())) })
            .await;
        assert!(result.is_err());
        assert!(!cache.is_cached(Collection::Employees));
    }

    #[tokio::test]
    async fn test_load_racing_an_invalidation_is_discarded() {
        let cache = cache();
        let shared = &cache;
        let loaded = cache
            .assets(move || async move {
                shared.invalidate(Mutation::AssetAssign);
                Ok(vec![asset_at("Office", None)])
            })
            .await
            .unwrap();

        assert_eq!(loaded.len(), 1);
        assert!(!cache.is_cached(Collection::Assets));
    }

    #[test]
    fn test_invalidation_rules() {
        use Collection::*;
        assert_eq!(Mutation::AssetAssign.invalidates(), &[Assets, Assignments, Employees]);
        assert_eq!(Mutation::AssetReturn.invalidates(), Mutation::AssetAssign.invalidates());
        assert_eq!(Mutation::BulkImport.invalidates(), &[Assets, Locations]);
        assert!(Mutation::EmployeeOffboard.invalidates().contains(&Assignments));
        assert_eq!(Mutation::AssignmentDelete.invalidates(), &[Assignments]);
        assert_eq!(Mutation::AlertWrite.invalidates(), &[Alerts]);
        assert_eq!(Mutation::LocationBackfill.invalidates(), &[Assets, Employees]);
    }
}
