#![forbid(unsafe_code)]

//! Canonical pointer/drag event types.
//!
//! The host's input layer (mouse, touch, test harness) translates its native
//! events into [`PointerEvent`] values and feeds them to the dock in arrival
//! order. All events derive `Clone`, `Copy`, and `PartialEq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - Positions are global (host window) coordinates; the dock converts them
//!   to local space against its bounding box.
//! - `PointerEnter`/`DragStart` carry a tile index because the host's hit
//!   regions are per-tile; position-carrying events are resolved by the dock
//!   itself.
//! - Event handlers are total: an event that does not apply to the current
//!   interaction phase is a no-op, never an error.

use crate::geometry::Point;

/// Canonical pointer event consumed by the dock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the tile at `index` (no drag active).
    PointerEnter {
        /// Index of the tile under the pointer.
        index: usize,
    },

    /// Pointer left all tiles (no drag active).
    PointerExit,

    /// A drag gesture started on the tile at `index`.
    DragStart {
        /// Index of the tile the drag picked up.
        index: usize,
    },

    /// The drag pointer moved; only re-evaluates whether the pointer is
    /// inside the dock's bounds.
    DragUpdate(Point),

    /// The drag pointer moved over the dock; may trigger a reorder.
    DragOverMove(Point),

    /// The drag pointer left the dock's bounds (host convenience for a
    /// [`DragUpdate`](PointerEvent::DragUpdate) that resolved outside).
    DragLeave,

    /// The drag gesture ended (drop or cancel).
    DragEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_comparable() {
        let a = PointerEvent::DragOverMove(Point::new(1.0, 2.0));
        let b = PointerEvent::DragOverMove(Point::new(1.0, 2.0));
        assert_eq!(a, b);
        assert_ne!(a, PointerEvent::DragEnd);
    }
}
