//! Scroll navigation math.
//!
//! Every entry renders at the same fixed height, so the offset that brings
//! an entry into view is plain multiplication. An out-of-range index is a
//! programming error in the caller and is signalled, never clamped.

use crate::error::{LineupError, Result};

/// Display height of one gallery entry, in scroll units
pub const DEFAULT_ENTRY_HEIGHT: f32 = 200.0;

/// Offset (in the same units as `entry_height`) that scrolls entry
/// `index` of a `total`-entry catalog to the top of the view.
pub fn scroll_offset(index: usize, total: usize, entry_height: f32) -> Result<f32> {
    if index >= total {
        return Err(LineupError::invalid_index(index, total));
    }
    Ok(index as f32 * entry_height)
}
