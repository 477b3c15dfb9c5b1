//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
///
/// Absence on reads is signalled through `Ok(None)`, never through an error;
/// this enum covers failed writes and genuine backend faults.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Write targeted an identity that is not present
    #[error("Entity not found: {key}")]
    NotFound { key: i32 },

    /// Insert collided with an existing identity
    #[error("Duplicate key: {key}")]
    Duplicate { key: i32 },

    /// Staged write for an entity that was never read tracked
    #[error("Entity is detached: {key}")]
    Detached { key: i32 },

    /// Unexpected backend failure
    #[error("Storage error: {0}")]
    Backend(String),
}
