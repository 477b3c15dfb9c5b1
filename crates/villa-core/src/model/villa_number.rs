//! VillaNumber entity definition

use super::Villa;
use serde::{Deserialize, Serialize};

/// A numbered unit belonging to a villa
///
/// Unlike [`Villa`], the identity is the caller-supplied `villa_no` itself.
/// `villa_id` must reference an existing villa at write time; the reference
/// is enforced by an existence check, not by cascading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillaNumber {
    /// The villa number, caller-supplied and unique
    pub villa_no: i32,

    /// Owning villa identity
    pub villa_id: i32,

    /// Free-text details for this unit
    pub special_details: String,

    /// Owning villa, populated only when eager inclusion was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villa: Option<Villa>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn villa_field_is_omitted_when_absent() {
        let number = VillaNumber {
            villa_no: 101,
            villa_id: 1,
            special_details: "Ground floor".to_string(),
            villa: None,
        };
        let json = serde_json::to_value(&number).unwrap();
        assert!(json.get("villa").is_none());
        assert_eq!(json["villa_no"], 101);
    }
}
