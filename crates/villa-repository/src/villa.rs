//! Villa repository

use crate::entity::Entity;
use crate::error::StoreResult;
use crate::memory::InMemoryStore;
use crate::traits::{PageRequest, Predicate, QueryOptions, Repository};
use async_trait::async_trait;
use std::sync::Arc;
use villa_core::Villa;

/// Repository over the villa entity set
///
/// Thin specialization of the generic store: adds the case-insensitive name
/// lookup used for uniqueness checks and keeps `created_at` immutable across
/// full overwrites.
pub struct VillaRepository {
    store: Arc<InMemoryStore<Villa>>,
}

impl Default for VillaRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VillaRepository {
    pub fn new() -> Self {
        VillaRepository {
            store: Arc::new(InMemoryStore::new()),
        }
    }

    /// Shared backing store, used by the villa-number repository for
    /// referential checks and eager loading
    pub(crate) fn backing(&self) -> Arc<InMemoryStore<Villa>> {
        Arc::clone(&self.store)
    }

    /// Case-insensitive lookup by name, the uniqueness criterion
    pub async fn find_by_name(&self, name: &str) -> StoreResult<Option<Villa>> {
        let name = name.to_string();
        self.store
            .get(
                Box::new(move |v: &Villa| v.name_matches(&name)),
                QueryOptions::untracked(),
            )
            .await
    }
}

#[async_trait]
impl Repository<Villa> for VillaRepository {
    async fn create(&self, entity: Villa) -> StoreResult<Villa> {
        self.store.create(entity).await
    }

    async fn get(
        &self,
        predicate: Predicate<Villa>,
        options: QueryOptions,
    ) -> StoreResult<Option<Villa>> {
        self.store.get(predicate, options).await
    }

    async fn get_all(
        &self,
        predicate: Option<Predicate<Villa>>,
        page: PageRequest,
        include: Option<&str>,
    ) -> StoreResult<Vec<Villa>> {
        self.store.get_all(predicate, page, include).await
    }

    async fn update(&self, entity: Villa) -> StoreResult<()> {
        // The creation timestamp is stamped once at insert; a full overwrite
        // carries the stored value over instead of trusting the caller's.
        let key = entity.key();
        let stored = self
            .store
            .get(Box::new(move |v: &Villa| v.id == key), QueryOptions::untracked())
            .await?;

        let mut entity = entity;
        if let Some(stored) = stored {
            entity.created_at = stored.created_at;
        }
        self.store.update(entity).await
    }

    async fn remove(&self, entity: &Villa) -> StoreResult<()> {
        self.store.remove(entity).await
    }
}
