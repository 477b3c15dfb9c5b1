//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Application state and query/response type definitions
//! - extractors: Custom request extractors (JSON body, admin gate)
//! - villas: Villa endpoint handlers
//! - villa_numbers: VillaNumber endpoint handlers
//! - v2: The v2 surface stub
//! - router: Router creation and configuration

mod extractors;
mod router;
mod tests;
mod v2;
mod villa_numbers;
mod villas;
pub mod types;

// Re-export public API
pub use extractors::{JsonExtractor, RequireAdmin};
pub use router::create_router;
pub use types::{AppState, HealthResponse, ListVillaNumbersQuery, ListVillasQuery};
