//! Partial update pipeline
//!
//! A patch is an ordered list of `{op, path, value}` operations applied to an
//! update shape. Operations are applied against the shape's JSON tree so the
//! same code serves every entity. Failures are accumulated rather than
//! aborting: an unknown path or a type-incompatible value records an error
//! and later operations still apply. The caller commits only when the
//! accumulated error list is empty, so an invalid patch is never persisted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field-level mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Overwrite an existing field
    Replace { path: String, value: Value },
    /// Set a field; one the shape does not carry is rejected when the
    /// patched tree maps back into the shape
    Add { path: String, value: Value },
    /// Drop a field; deserialization back into the shape rejects the
    /// removal of a required field
    Remove { path: String },
}

/// Ordered list of operations, the request body of a PATCH call
pub type PatchDocument = Vec<PatchOp>;

impl PatchOp {
    pub fn path(&self) -> &str {
        match self {
            PatchOp::Replace { path, .. } | PatchOp::Add { path, .. } | PatchOp::Remove { path } => {
                path
            }
        }
    }
}

/// Resolve a `/field` pointer against the flat update shapes
fn field_name(path: &str) -> Option<&str> {
    let name = path.strip_prefix('/')?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// Apply operations in order to a JSON object, returning accumulated errors
///
/// Every operation is attempted regardless of earlier failures.
pub fn apply_patch(target: &mut Value, ops: &[PatchOp]) -> Vec<String> {
    let mut errors = Vec::new();

    let object = match target.as_object_mut() {
        Some(object) => object,
        None => {
            errors.push("Patch target is not an object".to_string());
            return errors;
        }
    };

    for op in ops {
        let name = match field_name(op.path()) {
            Some(name) => name,
            None => {
                errors.push(format!("Invalid patch path: {}", op.path()));
                continue;
            }
        };

        match op {
            PatchOp::Replace { value, .. } => {
                if let Some(slot) = object.get_mut(name) {
                    *slot = value.clone();
                } else {
                    errors.push(format!("Unknown field for replace: {name}"));
                }
            }
            PatchOp::Add { value, .. } => {
                object.insert(name.to_string(), value.clone());
            }
            PatchOp::Remove { .. } => {
                if object.remove(name).is_none() {
                    errors.push(format!("Unknown field for remove: {name}"));
                }
            }
        }
    }

    errors
}

/// Apply a patch document to an update shape
///
/// The shape round-trips through its JSON tree; type-incompatible values
/// and removed required fields surface when mapping back and are reported
/// alongside the per-operation errors. Returns the patched shape only when
/// no error was recorded.
pub fn apply_to<T>(shape: &T, ops: &[PatchOp]) -> Result<T, Vec<String>>
where
    T: Serialize + DeserializeOwned,
{
    let mut tree = match serde_json::to_value(shape) {
        Ok(tree) => tree,
        Err(err) => return Err(vec![format!("Failed to project shape: {err}")]),
    };

    let mut errors = apply_patch(&mut tree, ops);

    match serde_json::from_value::<T>(tree) {
        Ok(patched) if errors.is_empty() => Ok(patched),
        Ok(_) => Err(errors),
        Err(err) => {
            errors.push(format!("Patched shape is invalid: {err}"));
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::VillaUpdateDto;
    use serde_json::json;

    fn sample() -> VillaUpdateDto {
        VillaUpdateDto {
            id: 1,
            name: "Royal Villa".to_string(),
            details: "Sea view".to_string(),
            image_url: "https://example.com/royal.jpg".to_string(),
            occupancy: 4,
            sqft: 550,
            rate: 200.0,
            amenity: "Pool".to_string(),
        }
    }

    #[test]
    fn patch_document_deserializes_tagged_ops() {
        let body = json!([
            {"op": "replace", "path": "/occupancy", "value": 6},
            {"op": "remove", "path": "/details"}
        ]);
        let doc: PatchDocument = serde_json::from_value(body).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0].path(), "/occupancy");
        assert!(matches!(doc[1], PatchOp::Remove { .. }));
    }

    #[test]
    fn replace_touches_only_the_targeted_field() {
        let dto = sample();
        let ops = vec![PatchOp::Replace {
            path: "/occupancy".to_string(),
            value: json!(8),
        }];
        let patched = apply_to(&dto, &ops).unwrap();
        assert_eq!(patched.occupancy, 8);
        assert_eq!(patched.name, dto.name);
        assert_eq!(patched.details, dto.details);
        assert_eq!(patched.rate, dto.rate);
        assert_eq!(patched.id, dto.id);
    }

    #[test]
    fn unknown_path_records_error_but_later_ops_still_apply() {
        let dto = sample();
        let ops = vec![
            PatchOp::Replace {
                path: "/garden".to_string(),
                value: json!("large"),
            },
            PatchOp::Replace {
                path: "/sqft".to_string(),
                value: json!(700),
            },
        ];
        let errors = apply_to(&dto, &ops).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("garden"));

        // The second op did apply to the tree even though the patch as a
        // whole is rejected.
        let mut tree = serde_json::to_value(&dto).unwrap();
        let tree_errors = apply_patch(&mut tree, &ops);
        assert_eq!(tree_errors.len(), 1);
        assert_eq!(tree["sqft"], json!(700));
    }

    #[test]
    fn adding_an_unknown_field_is_rejected() {
        let dto = sample();
        let ops = vec![PatchOp::Add {
            path: "/garden".to_string(),
            value: json!("large"),
        }];
        let errors = apply_to(&dto, &ops).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("garden"));
    }

    #[test]
    fn type_incompatible_value_is_rejected() {
        let dto = sample();
        let ops = vec![PatchOp::Replace {
            path: "/occupancy".to_string(),
            value: json!("six"),
        }];
        let errors = apply_to(&dto, &ops).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("invalid"));
    }

    #[test]
    fn removing_a_required_field_is_rejected() {
        let dto = sample();
        let ops = vec![PatchOp::Remove {
            path: "/name".to_string(),
        }];
        assert!(apply_to(&dto, &ops).is_err());
    }

    #[test]
    fn removing_a_defaulted_field_resets_it() {
        let dto = sample();
        let ops = vec![PatchOp::Remove {
            path: "/details".to_string(),
        }];
        let patched = apply_to(&dto, &ops).unwrap();
        assert_eq!(patched.details, "");
    }

    #[test]
    fn malformed_path_is_reported() {
        let dto = sample();
        let ops = vec![PatchOp::Replace {
            path: "occupancy".to_string(),
            value: json!(2),
        }];
        let errors = apply_to(&dto, &ops).unwrap_err();
        assert!(errors[0].contains("Invalid patch path"));
    }
}
