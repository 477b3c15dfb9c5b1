//! In-memory backing store
//!
//! Stand-in for the external persistence backend, kept behind the
//! [`Repository`] trait. Rows live in a `BTreeMap` keyed by identity, which
//! gives reads a stable ascending-key order; that order is what "the
//! backend's natural first match" means for this backend.
//!
//! # Change tracking
//!
//! A tracked read registers the key in the attachment set. Attached entities
//! may have writes staged into the pending buffer with [`InMemoryStore::stage`];
//! the buffer is flushed by the next `update`/`remove` on the same store (or
//! explicitly by [`InMemoryStore::save_changes`]). Untracked reads are
//! detached snapshots: staging one fails rather than silently joining the
//! buffer.

use crate::entity::Entity;
use crate::error::{StoreError, StoreResult};
use crate::traits::{PageRequest, Predicate, QueryOptions, Repository};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;
use villa_core::page_window;

/// Pending write staged behind a tracked read
enum PendingWrite<T> {
    Upsert(T),
    Delete(i32),
}

struct Inner<T> {
    rows: BTreeMap<i32, T>,
    next_key: i32,
    attached: BTreeSet<i32>,
    pending: Vec<PendingWrite<T>>,
}

impl<T: Entity> Inner<T> {
    fn flush(&mut self) {
        for write in self.pending.drain(..) {
            match write {
                PendingWrite::Upsert(entity) => {
                    self.rows.insert(entity.key(), entity);
                }
                PendingWrite::Delete(key) => {
                    self.rows.remove(&key);
                }
            }
        }
    }
}

/// Thread-safe in-memory entity store
pub struct InMemoryStore<T: Entity> {
    inner: RwLock<Inner<T>>,
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        InMemoryStore {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_key: 1,
                attached: BTreeSet::new(),
                pending: Vec::new(),
            }),
        }
    }

    /// Stage a write for an attached (tracked) entity
    ///
    /// The write is not visible until the buffer is flushed by the next
    /// `update`/`remove` call or by [`InMemoryStore::save_changes`].
    /// Staging a detached entity fails with [`StoreError::Detached`].
    pub async fn stage(&self, entity: T) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let key = entity.key();
        if !inner.attached.contains(&key) {
            return Err(StoreError::Detached { key });
        }
        inner.pending.push(PendingWrite::Upsert(entity));
        Ok(())
    }

    /// Stage a delete for an attached (tracked) entity
    pub async fn stage_delete(&self, entity: &T) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let key = entity.key();
        if !inner.attached.contains(&key) {
            return Err(StoreError::Detached { key });
        }
        inner.pending.push(PendingWrite::Delete(key));
        Ok(())
    }

    /// Flush the pending-write buffer
    pub async fn save_changes(&self) -> StoreResult<()> {
        self.inner.write().await.flush();
        Ok(())
    }

    /// Number of stored rows (pending writes excluded)
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryStore<T> {
    async fn create(&self, entity: T) -> StoreResult<T> {
        let mut inner = self.inner.write().await;
        let mut entity = entity;

        if T::STORE_KEYED {
            let key = inner.next_key;
            inner.next_key += 1;
            entity.set_key(key);
        } else {
            let key = entity.key();
            if inner.rows.contains_key(&key) {
                return Err(StoreError::Duplicate { key });
            }
        }

        entity.on_insert();
        inner.rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn get(&self, predicate: Predicate<T>, options: QueryOptions) -> StoreResult<Option<T>> {
        let mut inner = self.inner.write().await;
        // BTreeMap iteration order makes this the lowest matching key.
        let found = inner.rows.values().find(|row| predicate(row)).cloned();
        if let Some(entity) = &found {
            if options.tracked {
                let key = entity.key();
                inner.attached.insert(key);
            }
        }
        Ok(found)
    }

    async fn get_all(
        &self,
        predicate: Option<Predicate<T>>,
        page: PageRequest,
        _include: Option<&str>,
    ) -> StoreResult<Vec<T>> {
        let inner = self.inner.read().await;
        let filtered: Vec<&T> = match &predicate {
            Some(predicate) => inner.rows.values().filter(|row| predicate(row)).collect(),
            None => inner.rows.values().collect(),
        };
        let window = page_window(filtered.len(), page.page_size, page.page_number);
        Ok(filtered[window].iter().map(|row| (*row).clone()).collect())
    }

    async fn update(&self, entity: T) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.flush();
        let key = entity.key();
        if !inner.rows.contains_key(&key) {
            return Err(StoreError::NotFound { key });
        }
        inner.rows.insert(key, entity);
        Ok(())
    }

    async fn remove(&self, entity: &T) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.flush();
        let key = entity.key();
        if inner.rows.remove(&key).is_none() {
            return Err(StoreError::NotFound { key });
        }
        inner.attached.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use villa_core::Villa;
    use villa_core::VillaNumber;

    fn villa(name: &str, occupancy: i32) -> Villa {
        Villa {
            id: 0,
            name: name.to_string(),
            details: String::new(),
            image_url: String::new(),
            occupancy,
            sqft: 500,
            rate: 100.0,
            amenity: String::new(),
            created_at: Utc::now(),
        }
    }

    fn number(villa_no: i32, villa_id: i32) -> VillaNumber {
        VillaNumber {
            villa_no,
            villa_id,
            special_details: String::new(),
            villa: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_store_keys() {
        let store = InMemoryStore::<Villa>::new();
        let first = store.create(villa("A", 2)).await.unwrap();
        let second = store.create(villa("B", 4)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_caller_key() {
        let store = InMemoryStore::<VillaNumber>::new();
        store.create(number(101, 1)).await.unwrap();
        let err = store.create(number(101, 1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { key: 101 }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn round_trip_create_then_get() {
        let store = InMemoryStore::<Villa>::new();
        let stored = store.create(villa("Royal", 4)).await.unwrap();
        let found = store
            .get(
                Box::new(move |v| v.id == stored.id),
                QueryOptions::default(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Royal");
        assert_eq!(found.occupancy, 4);
    }

    #[tokio::test]
    async fn get_returns_none_for_no_match() {
        let store = InMemoryStore::<Villa>::new();
        let found = store
            .get(Box::new(|v| v.id == 99), QueryOptions::default())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn get_tie_break_is_lowest_key() {
        let store = InMemoryStore::<Villa>::new();
        store.create(villa("A", 4)).await.unwrap();
        store.create(villa("B", 4)).await.unwrap();
        let found = store
            .get(Box::new(|v| v.occupancy == 4), QueryOptions::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn get_all_filters_before_windowing() {
        let store = InMemoryStore::<Villa>::new();
        for i in 0..5 {
            store
                .create(villa(&format!("V{i}"), if i % 2 == 0 { 2 } else { 4 }))
                .await
                .unwrap();
        }
        let filtered = store
            .get_all(
                Some(Box::new(|v| v.occupancy == 2)),
                PageRequest::new(2, 1),
                None,
            )
            .await
            .unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|v| v.occupancy == 2));
    }

    #[tokio::test]
    async fn get_all_windows_pages_without_overlap() {
        let store = InMemoryStore::<Villa>::new();
        for i in 0..5 {
            store.create(villa(&format!("V{i}"), 2)).await.unwrap();
        }

        let page2 = store
            .get_all(None, PageRequest::new(2, 2), None)
            .await
            .unwrap();
        assert_eq!(page2.len(), 2);
        assert_eq!(page2[0].id, 3);
        assert_eq!(page2[1].id, 4);

        // Union over all pages reconstructs the set.
        let mut ids = Vec::new();
        for page in 1..=3 {
            let rows = store
                .get_all(None, PageRequest::new(2, page), None)
                .await
                .unwrap();
            ids.extend(rows.iter().map(|v| v.id));
        }
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn get_all_with_zero_size_returns_everything() {
        let store = InMemoryStore::<Villa>::new();
        for i in 0..3 {
            store.create(villa(&format!("V{i}"), 2)).await.unwrap();
        }
        let all = store
            .get_all(None, PageRequest::default(), None)
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn get_all_past_the_end_is_empty() {
        let store = InMemoryStore::<Villa>::new();
        store.create(villa("A", 2)).await.unwrap();
        let rows = store
            .get_all(None, PageRequest::new(10, 5), None)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_existing_row() {
        let store = InMemoryStore::<Villa>::new();
        let mut stored = store.create(villa("A", 2)).await.unwrap();
        stored.occupancy = 6;
        store.update(stored.clone()).await.unwrap();

        let found = store
            .get(Box::new(move |v| v.id == stored.id), QueryOptions::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.occupancy, 6);
    }

    #[tokio::test]
    async fn update_of_absent_identity_fails() {
        let store = InMemoryStore::<Villa>::new();
        let mut ghost = villa("Ghost", 2);
        ghost.id = 42;
        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { key: 42 }));
    }

    #[tokio::test]
    async fn remove_of_absent_identity_fails() {
        let store = InMemoryStore::<Villa>::new();
        let mut ghost = villa("Ghost", 2);
        ghost.id = 42;
        let err = store.remove(&ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { key: 42 }));
    }

    #[tokio::test]
    async fn tracked_read_allows_staging_and_update_flushes() {
        let store = InMemoryStore::<Villa>::new();
        let stored = store.create(villa("A", 2)).await.unwrap();
        let id = stored.id;

        let mut tracked = store
            .get(Box::new(move |v| v.id == id), QueryOptions::default())
            .await
            .unwrap()
            .unwrap();
        tracked.occupancy = 8;
        store.stage(tracked).await.unwrap();

        // Staged write is not visible yet.
        let before = store
            .get(Box::new(move |v| v.id == id), QueryOptions::untracked())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(before.occupancy, 2);

        // Any update on the store flushes the buffer.
        let other = store.create(villa("B", 4)).await.unwrap();
        store.update(other).await.unwrap();

        let after = store
            .get(Box::new(move |v| v.id == id), QueryOptions::untracked())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.occupancy, 8);
    }

    #[tokio::test]
    async fn untracked_read_is_detached() {
        let store = InMemoryStore::<Villa>::new();
        let stored = store.create(villa("A", 2)).await.unwrap();
        let id = stored.id;

        let mut detached = store
            .get(Box::new(move |v| v.id == id), QueryOptions::untracked())
            .await
            .unwrap()
            .unwrap();
        detached.occupancy = 9;

        let err = store.stage(detached).await.unwrap_err();
        assert!(matches!(err, StoreError::Detached { .. }));
    }

    #[tokio::test]
    async fn save_changes_flushes_staged_delete() {
        let store = InMemoryStore::<Villa>::new();
        let stored = store.create(villa("A", 2)).await.unwrap();
        let id = stored.id;

        let tracked = store
            .get(Box::new(move |v| v.id == id), QueryOptions::default())
            .await
            .unwrap()
            .unwrap();
        store.stage_delete(&tracked).await.unwrap();
        assert_eq!(store.len().await, 1);

        store.save_changes().await.unwrap();
        assert!(store.is_empty().await);
    }
}
