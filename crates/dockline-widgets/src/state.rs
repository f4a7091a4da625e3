#![forbid(unsafe_code)]

//! The interaction state machine.
//!
//! [`DockState`] owns the item list and the pointer/drag phase, and routes
//! every mutation through explicit handlers. Handlers run to completion in
//! arrival order on the host's event loop; there is no interior mutability
//! and no aliasing of the item list into closures.
//!
//! # State Machine
//!
//! ```text
//! Idle ──PointerEnter(i)──▶ Hovering(i) ──DragStart(i)──▶ Dragging(i, outside=false)
//!   ▲        │ PointerExit                                  │  DragUpdate / DragLeave: outside flag
//!   └────────┘                                              │  DragOverMove: reorder + retrack index
//!   ◀──────────────────────── DragEnd ──────────────────────┘
//! ```
//!
//! During a drag the machine tracks the dragged item's *current slot index*,
//! updated on every successful move. Identity equality is never consulted on
//! this path, so duplicate-valued items reorder correctly.
//!
//! # Invariants
//!
//! 1. At most one reorder per pointer-move event.
//! 2. `PointerEnter` during a drag never clobbers the outside flag; only
//!    `DragUpdate`, `DragOverMove`, and `DragLeave` may change it.
//! 3. A drop outside the bounds never removes the item; `DragEnd` always
//!    restores `Idle` with the list intact.
//! 4. Redundant transitions (`DragEnd` with no drag, re-hovering the same
//!    tile) are idempotent no-ops.
//! 5. The revision counter increments exactly when observable state changed.
//!
//! # Failure Modes
//!
//! - Bounds never supplied (queried before first layout): pointer-position
//!   events are skipped; enter/exit/start/end still work, so the machine
//!   degrades to hover-only behavior rather than misresolving slots.
//! - Unresolvable target slot: the move event is ignored — a valid quiescent
//!   outcome, not an error.

use dockline_core::event::PointerEvent;
use dockline_core::geometry::{Point, Rect};

use crate::reorder::move_index;
use crate::resolver;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Interaction phase of the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No pointer over the dock, no drag active.
    #[default]
    Idle,
    /// Pointer resting over a tile.
    Hovering {
        /// Index of the hovered tile.
        index: usize,
    },
    /// A tile is being dragged.
    Dragging {
        /// Current slot of the dragged item (equals the hovered index).
        index: usize,
        /// Whether the pointer has left the dock's bounding box.
        is_outside: bool,
    },
}

// ---------------------------------------------------------------------------
// DockState
// ---------------------------------------------------------------------------

/// Mutable session state for one dock.
///
/// Created when the dock mounts, seeded from the initial item list, and
/// dropped when it unmounts. Rendering code observes it read-only; all
/// mutation flows through [`handle`](DockState::handle) and
/// [`set_bounds`](DockState::set_bounds).
#[derive(Debug, Clone)]
pub struct DockState<T> {
    items: Vec<T>,
    phase: Phase,
    bounds: Option<Rect>,
    gap: f32,
    revision: u64,
}

impl<T> DockState<T> {
    /// Create state seeded from `items`. `gap` is the fixed inter-item gap
    /// allowance used for slot resolution.
    #[must_use]
    pub fn new(items: Vec<T>, gap: f32) -> Self {
        Self {
            items,
            phase: Phase::Idle,
            bounds: None,
            gap,
            revision: 0,
        }
    }

    /// The items in render order (left to right).
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dock holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current interaction phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index under the pointer, via hover or drag-over.
    #[inline]
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Hovering { index } | Phase::Dragging { index, .. } => Some(index),
        }
    }

    /// Whether a drag gesture is active.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Current slot of the dragged item, if a drag is active.
    #[inline]
    #[must_use]
    pub const fn drag_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Dragging { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Whether the drag pointer has left the dock's bounds.
    #[inline]
    #[must_use]
    pub const fn is_outside(&self) -> bool {
        matches!(
            self.phase,
            Phase::Dragging {
                is_outside: true,
                ..
            }
        )
    }

    /// Monotonic change counter; increments on every observable mutation.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The dock's bounding box, once supplied by the host layout.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Supply the dock's bounding box from the host layout system.
    ///
    /// Returns `true` if the box changed.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.bounds == Some(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        self.revision += 1;
        true
    }

    /// Insert an item at `index` (clamped). No-op during an active drag.
    ///
    /// Returns `true` if the list changed.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        if self.is_dragging() {
            return false;
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        // A hover past the insertion point now names the shifted tile; the
        // next PointerEnter corrects it, so only the list changes here.
        self.revision += 1;
        true
    }

    /// Remove and return the item at `index`. No-op during an active drag.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if self.is_dragging() || index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        if let Phase::Hovering { index: hovered } = self.phase
            && hovered >= self.items.len()
        {
            self.phase = Phase::Idle;
        }
        self.revision += 1;
        Some(item)
    }

    // -----------------------------------------------------------------------
    // Event handling
    // -----------------------------------------------------------------------

    /// Process one pointer event. Returns `true` if observable state changed.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let changed = match *event {
            PointerEvent::PointerEnter { index } => self.pointer_enter(index),
            PointerEvent::PointerExit => self.pointer_exit(),
            PointerEvent::DragStart { index } => self.drag_start(index),
            PointerEvent::DragUpdate(pos) => self.drag_update(pos),
            PointerEvent::DragOverMove(pos) => self.drag_over_move(pos),
            PointerEvent::DragLeave => self.drag_leave(),
            PointerEvent::DragEnd => self.drag_end(),
        };
        if changed {
            self.revision += 1;
        }
        changed
    }

    fn pointer_enter(&mut self, index: usize) -> bool {
        // Hover re-entry mid-drag must not disturb the outside flag.
        if self.is_dragging() || self.items.is_empty() {
            return false;
        }
        let index = index.min(self.items.len() - 1);
        if self.phase == (Phase::Hovering { index }) {
            return false;
        }
        self.phase = Phase::Hovering { index };
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "dock.hover", index);
        true
    }

    fn pointer_exit(&mut self) -> bool {
        if matches!(self.phase, Phase::Hovering { .. }) {
            self.phase = Phase::Idle;
            true
        } else {
            false
        }
    }

    fn drag_start(&mut self, index: usize) -> bool {
        if self.is_dragging() || index >= self.items.len() {
            return false;
        }
        self.phase = Phase::Dragging {
            index,
            is_outside: false,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "dock.drag_start", index);
        true
    }

    fn drag_update(&mut self, pos: Point) -> bool {
        let Phase::Dragging { index, is_outside } = self.phase else {
            return false;
        };
        let Some(bounds) = self.bounds else {
            return false;
        };
        let outside = resolver::is_outside(pos, bounds);
        if outside == is_outside {
            return false;
        }
        self.phase = Phase::Dragging {
            index,
            is_outside: outside,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "dock.drag_outside", outside);
        true
    }

    fn drag_over_move(&mut self, pos: Point) -> bool {
        let Phase::Dragging {
            index,
            is_outside: false,
        } = self.phase
        else {
            return false;
        };
        let Some(bounds) = self.bounds else {
            return false;
        };
        let Some(target) = resolver::resolve_index(pos, bounds, self.items.len(), self.gap) else {
            return false;
        };
        if target == index {
            return false;
        }
        // One atomic move per event; the dragged item now sits at `target`.
        move_index(&mut self.items, index, target);
        self.phase = Phase::Dragging {
            index: target,
            is_outside: false,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "dock.reorder", from = index, to = target);
        true
    }

    fn drag_leave(&mut self) -> bool {
        let Phase::Dragging {
            index,
            is_outside: false,
        } = self.phase
        else {
            return false;
        };
        self.phase = Phase::Dragging {
            index,
            is_outside: true,
        };
        true
    }

    fn drag_end(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = Phase::Idle;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "dock.drag_end");
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
