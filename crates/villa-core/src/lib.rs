//! Villa Admin Core - Shared types for the villa administration API
//!
//! This crate provides the types used across the workspace:
//! - Entity records (Villa, VillaNumber)
//! - Transfer shapes (create/update/read DTOs) and their conversions
//! - The uniform response envelope
//! - Pagination metadata and window math
//! - The JSON patch document and apply pipeline

pub mod dto;
pub mod envelope;
pub mod model;
pub mod pagination;
pub mod patch;

// Re-export commonly used types
pub use dto::{
    VillaCreateDto, VillaDto, VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto,
    VillaUpdateDto,
};
pub use envelope::ApiResponse;
pub use model::{Villa, VillaNumber};
pub use pagination::{page_window, Pagination};
pub use patch::{apply_patch, apply_to, PatchDocument, PatchOp};
