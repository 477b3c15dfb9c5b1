//! VillaNumber repository

use crate::error::StoreResult;
use crate::memory::InMemoryStore;
use crate::traits::{PageRequest, Predicate, QueryOptions, Repository};
use crate::villa::VillaRepository;
use async_trait::async_trait;
use std::sync::Arc;
use villa_core::{Villa, VillaNumber};

/// The one relation a villa-number read can include eagerly
pub const INCLUDE_VILLA: &str = "Villa";

/// Repository over the villa-number entity set
///
/// Holds a handle to the villa store so reads can eagerly load the owning
/// villa when `include = "Villa"` is requested, and so writes can check that
/// the referenced villa exists. The check and the insert are independent
/// operations; a villa deleted between the two is an accepted race.
pub struct VillaNumberRepository {
    store: Arc<InMemoryStore<VillaNumber>>,
    villas: Arc<InMemoryStore<Villa>>,
}

impl VillaNumberRepository {
    pub fn new(villas: &VillaRepository) -> Self {
        VillaNumberRepository {
            store: Arc::new(InMemoryStore::new()),
            villas: villas.backing(),
        }
    }

    /// Whether the referenced villa exists at this moment
    pub async fn villa_exists(&self, villa_id: i32) -> StoreResult<bool> {
        Ok(self
            .villas
            .get(
                Box::new(move |v: &Villa| v.id == villa_id),
                QueryOptions::untracked(),
            )
            .await?
            .is_some())
    }

    async fn hydrate(&self, mut number: VillaNumber) -> StoreResult<VillaNumber> {
        let villa_id = number.villa_id;
        number.villa = self
            .villas
            .get(
                Box::new(move |v: &Villa| v.id == villa_id),
                QueryOptions::untracked(),
            )
            .await?;
        Ok(number)
    }
}

#[async_trait]
impl Repository<VillaNumber> for VillaNumberRepository {
    async fn create(&self, entity: VillaNumber) -> StoreResult<VillaNumber> {
        // The embedded relation is a read-side projection, never stored.
        let mut entity = entity;
        entity.villa = None;
        self.store.create(entity).await
    }

    async fn get(
        &self,
        predicate: Predicate<VillaNumber>,
        options: QueryOptions,
    ) -> StoreResult<Option<VillaNumber>> {
        let include_villa = options.include.as_deref() == Some(INCLUDE_VILLA);
        let found = self.store.get(predicate, options).await?;
        match found {
            Some(number) if include_villa => Ok(Some(self.hydrate(number).await?)),
            other => Ok(other),
        }
    }

    async fn get_all(
        &self,
        predicate: Option<Predicate<VillaNumber>>,
        page: PageRequest,
        include: Option<&str>,
    ) -> StoreResult<Vec<VillaNumber>> {
        let rows = self.store.get_all(predicate, page, include).await?;
        if include != Some(INCLUDE_VILLA) {
            return Ok(rows);
        }
        let mut hydrated = Vec::with_capacity(rows.len());
        for number in rows {
            hydrated.push(self.hydrate(number).await?);
        }
        Ok(hydrated)
    }

    async fn update(&self, entity: VillaNumber) -> StoreResult<()> {
        let mut entity = entity;
        entity.villa = None;
        self.store.update(entity).await
    }

    async fn remove(&self, entity: &VillaNumber) -> StoreResult<()> {
        self.store.remove(entity).await
    }
}
