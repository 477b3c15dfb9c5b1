//! REST API type definitions
//!
//! Application state plus request query shapes for the REST endpoints.

use crate::config::ServerConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use villa_repository::{VillaNumberRepository, VillaRepository};

/// Application state
///
/// The repositories are version-agnostic; every API surface uses the same
/// instances.
#[derive(Clone)]
pub struct AppState {
    pub villas: Arc<VillaRepository>,
    pub villa_numbers: Arc<VillaNumberRepository>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let villas = Arc::new(VillaRepository::new());
        let villa_numbers = Arc::new(VillaNumberRepository::new(&villas));
        AppState {
            villas,
            villa_numbers,
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters for the villa list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVillasQuery {
    /// Only villas with exactly this occupancy; ignored when absent or
    /// non-positive
    #[serde(default)]
    pub filter_occupancy: Option<i32>,

    /// Case-insensitive substring over name and amenity, applied after the
    /// occupancy filter
    #[serde(default)]
    pub search: Option<String>,

    /// Window size; `<= 0` returns the full filtered set
    #[serde(default)]
    pub page_size: i32,

    /// 1-based window index; values below 1 are treated as 1
    #[serde(default = "default_page_number")]
    pub page_number: i32,
}

impl Default for ListVillasQuery {
    fn default() -> Self {
        ListVillasQuery {
            filter_occupancy: None,
            search: None,
            page_size: 0,
            page_number: 1,
        }
    }
}

/// Query parameters for the villa-number list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVillaNumbersQuery {
    /// Eagerly load the owning villa into each row (on by default, matching
    /// the admin UI's needs)
    #[serde(default = "default_include_villa")]
    pub include_villa: bool,

    #[serde(default)]
    pub page_size: i32,

    #[serde(default = "default_page_number")]
    pub page_number: i32,
}

impl Default for ListVillaNumbersQuery {
    fn default() -> Self {
        ListVillaNumbersQuery {
            include_villa: true,
            page_size: 0,
            page_number: 1,
        }
    }
}

fn default_page_number() -> i32 {
    1
}

fn default_include_villa() -> bool {
    true
}
