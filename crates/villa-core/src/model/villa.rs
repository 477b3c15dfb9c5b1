//! Villa entity definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rentable villa
///
/// The identity is assigned by the store on insert. `name` is unique across
/// all villas, compared case-insensitively. `created_at` is stamped once at
/// insertion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villa {
    /// Store-assigned identity
    pub id: i32,

    /// Display name, case-insensitively unique
    pub name: String,

    /// Free-text description
    pub details: String,

    /// Image reference
    pub image_url: String,

    /// Maximum occupancy
    pub occupancy: i32,

    /// Floor area in square feet
    pub sqft: i32,

    /// Nightly rate
    pub rate: f64,

    /// Amenity description, searched together with `name`
    pub amenity: String,

    /// Insertion timestamp, immutable after create
    pub created_at: DateTime<Utc>,
}

impl Villa {
    /// Case-insensitive name equality, the uniqueness criterion
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}
