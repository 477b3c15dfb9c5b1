//! Pagination metadata and window math
//!
//! The metadata travels out-of-band (the `X-Pagination` response header),
//! never in the body, and no total count is computed.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Serializable window metadata attached alongside list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: i32,
    pub page_size: i32,
}

/// Compute the index window for a page over a set of `len` items
///
/// `page_size <= 0` selects the whole set. `page_number` is 1-based and
/// values below 1 are treated as 1. The window is clipped to the available
/// items and empty once the offset passes the end of the set.
pub fn page_window(len: usize, page_size: i32, page_number: i32) -> Range<usize> {
    if page_size <= 0 {
        return 0..len;
    }
    let size = page_size as usize;
    let number = page_number.max(1) as usize;
    let start = (number - 1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}
