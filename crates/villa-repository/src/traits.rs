//! Core trait definitions for the repository pattern
//!
//! [`Repository`] is the single generic contract used by every endpoint
//! across both entity types and both API versions. Implementations sit in
//! front of a backing store; the in-memory store in this crate is one such
//! backend and a database-backed store slots in behind the same trait.

use crate::entity::Entity;
use crate::error::StoreResult;
use async_trait::async_trait;

/// Caller-supplied matching function used to filter entities
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Read options: tracking behavior and eager relation loading
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Tracked reads join the store's pending-write buffer; untracked
    /// reads return a detached snapshot safe to mutate locally
    pub tracked: bool,

    /// Name of a related entity to load eagerly (e.g. `"Villa"` on a
    /// villa-number read)
    pub include: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            tracked: true,
            include: None,
        }
    }
}

impl QueryOptions {
    /// Detached snapshot read
    pub fn untracked() -> Self {
        QueryOptions {
            tracked: false,
            include: None,
        }
    }

    /// Request eager loading of a named relation
    pub fn including(mut self, relation: impl Into<String>) -> Self {
        self.include = Some(relation.into());
        self
    }
}

/// Pagination request: filter first, then window
///
/// `page_size <= 0` returns the full filtered set. `page_number` is 1-based
/// and values below 1 are treated as 1.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page_size: i32,
    pub page_number: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page_size: 0,
            page_number: 1,
        }
    }
}

impl PageRequest {
    pub fn new(page_size: i32, page_number: i32) -> Self {
        PageRequest {
            page_size,
            page_number,
        }
    }
}

/// Generic CRUD and query composition over one entity type
///
/// # Contract
///
/// - Reads signal absence with `Ok(None)` / an empty vec, never an error;
///   errors are reserved for failed writes and backend faults.
/// - `update` is a full unconditional overwrite. No concurrency token is
///   compared, so concurrent updates race and the last write wins.
/// - When several entities satisfy a `get` predicate, the first match in
///   the backend's natural order is returned. That tie-break is not part
///   of the contract; for the in-memory backend it is ascending key order.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new entity
    ///
    /// For store-keyed entities the identity is assigned here; for
    /// caller-keyed entities a colliding key fails with
    /// [`StoreError::Duplicate`](crate::StoreError::Duplicate). The stored
    /// entity is returned with identity and insertion fields populated.
    async fn create(&self, entity: T) -> StoreResult<T>;

    /// First entity satisfying the predicate, or `None`
    async fn get(&self, predicate: Predicate<T>, options: QueryOptions) -> StoreResult<Option<T>>;

    /// All entities satisfying the predicate, windowed by `page`
    ///
    /// The predicate applies before pagination. `None` means no filter.
    async fn get_all(
        &self,
        predicate: Option<Predicate<T>>,
        page: PageRequest,
        include: Option<&str>,
    ) -> StoreResult<Vec<T>>;

    /// Replace the stored entity matched by identity
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// the identity is absent; there is no upsert.
    async fn update(&self, entity: T) -> StoreResult<()>;

    /// Delete by identity
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// the identity is already absent.
    async fn remove(&self, entity: &T) -> StoreResult<()>;
}
