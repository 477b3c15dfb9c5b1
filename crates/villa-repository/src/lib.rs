//! Repository abstraction layer for the villa administration API
//!
//! This crate provides a unified async interface for CRUD and query
//! composition over one entity type against a backing store.
//!
//! # Features
//!
//! - **Generic `Repository<T>` trait**: create/get/get_all/update/remove,
//!   implemented once and reused by both entity types and both API versions
//! - **Predicate filtering**: first-class closures over the entity type
//! - **Pagination**: filter first, then window
//! - **Tracked vs untracked reads**: tracked reads join the store's
//!   pending-write buffer, untracked reads are detached snapshots
//! - **In-memory backend**: the stand-in for the external persistence
//!   backend, kept behind the trait so a database store can slot in
//!
//! # Quick Start
//!
//! ```
//! use villa_repository::{QueryOptions, PageRequest, Repository, VillaRepository};
//! use villa_core::dto::VillaCreateDto;
//! use villa_core::Villa;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let repo = VillaRepository::new();
//!
//! let villa: Villa = VillaCreateDto {
//!     name: "Royal Villa".to_string(),
//!     details: String::new(),
//!     image_url: String::new(),
//!     occupancy: 4,
//!     sqft: 550,
//!     rate: 200.0,
//!     amenity: "Pool".to_string(),
//! }
//! .into();
//!
//! let stored = repo.create(villa).await?;
//! assert!(stored.id > 0);
//!
//! let found = repo
//!     .get(Box::new(move |v| v.id == stored.id), QueryOptions::default())
//!     .await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod memory;
pub mod traits;
pub mod villa;
pub mod villa_number;

// Re-exports - Error
pub use error::{StoreError, StoreResult};

// Re-exports - Traits
pub use entity::Entity;
pub use traits::{PageRequest, Predicate, QueryOptions, Repository};

// Re-exports - Backends and repositories
pub use memory::InMemoryStore;
pub use villa::VillaRepository;
pub use villa_number::{VillaNumberRepository, INCLUDE_VILLA};
