#![forbid(unsafe_code)]

//! Geometry resolution: pointer coordinates → slot index.
//!
//! The dock divides its content width into `item_count` equal slots, each
//! narrowed by a fixed inter-item gap allowance. Resolution is pure floor
//! division in dock-local space.
//!
//! # Invariants
//!
//! 1. `resolve_index` is monotone non-decreasing in pointer X for a fixed
//!    bounding box and item count.
//! 2. A resolved index is always `< item_count` (over-shoot clamps to the
//!    last slot).
//! 3. Degenerate input (zero items, non-positive slot width, pointer left of
//!    the first slot) resolves to `None` — the "no valid target" sentinel.
//!
//! # Failure Modes
//!
//! - A gap allowance at or above the raw slot width collapses every slot;
//!   resolution returns `None` rather than dividing by a non-positive width.

use dockline_core::geometry::{Point, Rect};

/// Resolve a global pointer position to a slot index.
///
/// Returns `None` when the pointer does not map to any slot. Callers treat
/// `None` as "ignore this move event" — a valid quiescent outcome, not an
/// error.
#[must_use]
pub fn resolve_index(pointer: Point, bounds: Rect, item_count: usize, gap: f32) -> Option<usize> {
    if item_count == 0 || bounds.is_empty() {
        return None;
    }
    let slot_width = bounds.width / item_count as f32 - gap;
    if slot_width <= 0.0 {
        return None;
    }
    let local_x = pointer.x - bounds.x;
    if local_x < 0.0 {
        return None;
    }
    let index = (local_x / slot_width).floor() as usize;
    Some(index.min(item_count - 1))
}

/// Whether a global pointer position lies outside the dock's bounding box.
///
/// True if either coordinate falls beyond the box's extent. An empty box is
/// outside everything.
#[inline]
#[must_use]
pub fn is_outside(pointer: Point, bounds: Rect) -> bool {
    !bounds.contains(pointer)
}
