//! Transfer shapes for the API surface
//!
//! Each entity has three shapes: a create shape (no store-assigned identity),
//! an update shape (identity required, must match the path identity), and a
//! read shape (full projection). Conversions are plain `From` impls so the
//! mapping is visible in one place.

use crate::model::{Villa, VillaNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read shape for [`Villa`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillaDto {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub image_url: String,
    pub occupancy: i32,
    pub sqft: i32,
    pub rate: f64,
    pub amenity: String,
    pub created_at: DateTime<Utc>,
}

/// Create shape for [`Villa`]
///
/// Deliberately has no `id`: the store assigns identity. A request that
/// pre-supplies one is rejected at deserialization, before reaching the
/// store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VillaCreateDto {
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub amenity: String,
}

/// Update shape for [`Villa`]
///
/// Rejects unknown fields so the patch pipeline's round trip surfaces an
/// `add` of a field the shape does not carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VillaUpdateDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub amenity: String,
}

/// Read shape for [`VillaNumber`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillaNumberDto {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villa: Option<VillaDto>,
}

/// Create shape for [`VillaNumber`]
///
/// Carries `villa_no` because the number itself is the key (caller-supplied,
/// unlike the store-assigned villa identity).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VillaNumberCreateDto {
    pub villa_no: i32,
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}

/// Update shape for [`VillaNumber`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VillaNumberUpdateDto {
    pub villa_no: i32,
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}

impl VillaCreateDto {
    /// Domain checks applied before the store is touched
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Villa name must not be empty".to_string());
        }
        if self.occupancy < 0 {
            errors.push("Occupancy must not be negative".to_string());
        }
        if self.sqft < 0 {
            errors.push("Area must not be negative".to_string());
        }
        if self.rate < 0.0 {
            errors.push("Rate must not be negative".to_string());
        }
        errors
    }
}

impl VillaUpdateDto {
    /// Domain checks applied before the store is touched
    ///
    /// Also used by the patch pipeline to gate the commit.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Villa name must not be empty".to_string());
        }
        if self.occupancy < 0 {
            errors.push("Occupancy must not be negative".to_string());
        }
        if self.sqft < 0 {
            errors.push("Area must not be negative".to_string());
        }
        if self.rate < 0.0 {
            errors.push("Rate must not be negative".to_string());
        }
        errors
    }
}

impl VillaNumberCreateDto {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.villa_no <= 0 {
            errors.push("Villa number must be positive".to_string());
        }
        if self.villa_id <= 0 {
            errors.push("Villa id must be positive".to_string());
        }
        errors
    }
}

impl VillaNumberUpdateDto {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.villa_no <= 0 {
            errors.push("Villa number must be positive".to_string());
        }
        if self.villa_id <= 0 {
            errors.push("Villa id must be positive".to_string());
        }
        errors
    }
}

impl From<VillaCreateDto> for Villa {
    fn from(dto: VillaCreateDto) -> Self {
        Villa {
            // Placeholder until the store assigns the identity and stamps
            // the creation time on insert.
            id: 0,
            name: dto.name,
            details: dto.details,
            image_url: dto.image_url,
            occupancy: dto.occupancy,
            sqft: dto.sqft,
            rate: dto.rate,
            amenity: dto.amenity,
            created_at: Utc::now(),
        }
    }
}

impl From<VillaUpdateDto> for Villa {
    fn from(dto: VillaUpdateDto) -> Self {
        Villa {
            id: dto.id,
            name: dto.name,
            details: dto.details,
            image_url: dto.image_url,
            occupancy: dto.occupancy,
            sqft: dto.sqft,
            rate: dto.rate,
            amenity: dto.amenity,
            // The stored creation time survives the overwrite; the
            // repository carries it over on update.
            created_at: Utc::now(),
        }
    }
}

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        VillaDto {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            image_url: villa.image_url,
            occupancy: villa.occupancy,
            sqft: villa.sqft,
            rate: villa.rate,
            amenity: villa.amenity,
            created_at: villa.created_at,
        }
    }
}

impl From<Villa> for VillaUpdateDto {
    fn from(villa: Villa) -> Self {
        VillaUpdateDto {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            image_url: villa.image_url,
            occupancy: villa.occupancy,
            sqft: villa.sqft,
            rate: villa.rate,
            amenity: villa.amenity,
        }
    }
}

impl From<VillaNumberCreateDto> for VillaNumber {
    fn from(dto: VillaNumberCreateDto) -> Self {
        VillaNumber {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_details: dto.special_details,
            villa: None,
        }
    }
}

impl From<VillaNumberUpdateDto> for VillaNumber {
    fn from(dto: VillaNumberUpdateDto) -> Self {
        VillaNumber {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_details: dto.special_details,
            villa: None,
        }
    }
}

impl From<VillaNumber> for VillaNumberDto {
    fn from(number: VillaNumber) -> Self {
        VillaNumberDto {
            villa_no: number.villa_no,
            villa_id: number.villa_id,
            special_details: number.special_details,
            villa: number.villa.map(VillaDto::from),
        }
    }
}

impl From<VillaNumber> for VillaNumberUpdateDto {
    fn from(number: VillaNumber) -> Self {
        VillaNumberUpdateDto {
            villa_no: number.villa_no,
            villa_id: number.villa_id,
            special_details: number.special_details,
        }
    }
}
