#![forbid(unsafe_code)]

//! Transition coordination: per-tile visual parameters and their
//! interpolation.
//!
//! Every state change produces a fresh set of target [`VisualParams`] — a
//! pure function of [`DockState`] — which the [`TransitionCoordinator`]
//! feeds into per-tile [`Tween`]s. Concurrent changes to the same tile
//! retarget the in-flight interpolation from its current sampled value
//! rather than queuing, so motion never jumps and never backlogs.
//!
//! # Invariants
//!
//! 1. A logical tile is never rendered twice: while a drag is active the
//!    slot holding the dragged item targets opacity 0 (the host draws the
//!    floating drag feedback instead).
//! 2. Once the drag pointer is outside the dock, the dragged slot's size
//!    targets 0 (the placeholder collapses); the item list is untouched.
//! 3. Newly appearing tiles are seeded *at* their first target — mounting
//!    never animates from zero.
//! 4. `tick` is the only way coordinator output changes between syncs.

use std::time::Duration;

use dockline_core::animation::{Animation, EasingFn, Tween, ease_in_out};

use crate::dock::DockConfig;
use crate::magnify::magnify;
use crate::state::DockState;

// ---------------------------------------------------------------------------
// Visual parameters
// ---------------------------------------------------------------------------

/// Derived per-tile render parameters. Never persisted; recomputed from
/// [`DockState`] on every change notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    /// Tile edge length.
    pub size: f32,
    /// Tile opacity in [0.0, 1.0].
    pub opacity: f32,
    /// Vertical lift (negative = up).
    pub vertical_offset: f32,
}

/// Compute target parameters for every tile from scratch.
///
/// Pure and cheap; called after each state change rather than patching
/// incrementally.
#[must_use]
pub fn visual_targets<T>(state: &DockState<T>, config: &DockConfig) -> Vec<VisualParams> {
    let hovered = state.hovered();
    let drag_slot = state.drag_index();
    let collapsed = state.is_outside();

    (0..state.len())
        .map(|index| {
            let mut size = magnify(
                index,
                hovered,
                config.base_size,
                config.hover_size,
                config.falloff,
            );
            if collapsed && drag_slot == Some(index) {
                size = 0.0;
            }
            // The dragged item's slot is drawn by the host as floating drag
            // feedback; hiding the in-place tile prevents a double render.
            let opacity = if drag_slot == Some(index) { 0.0 } else { 1.0 };
            let vertical_offset = match hovered {
                Some(h) if index.abs_diff(h) <= 1 => -size / config.lift_divisor,
                _ => 0.0,
            };
            VisualParams {
                size,
                opacity,
                vertical_offset,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

/// Interpolation timing shared by all tiles.
#[derive(Debug, Clone, Copy)]
pub struct TransitionConfig {
    /// Duration of every parameter transition.
    pub duration: Duration,
    /// Easing curve applied to every transition.
    pub easing: EasingFn,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
            easing: ease_in_out,
        }
    }
}

/// In-flight interpolations for one tile.
#[derive(Debug, Clone)]
struct TileMotion {
    size: Tween,
    opacity: Tween,
    offset: Tween,
}

impl TileMotion {
    /// Seed a tile settled at `target` (no mount animation).
    fn seeded(target: &VisualParams, config: &TransitionConfig) -> Self {
        let tween = |value: f32| {
            Tween::new(value)
                .with_duration(config.duration)
                .with_easing(config.easing)
        };
        Self {
            size: tween(target.size),
            opacity: tween(target.opacity),
            offset: tween(target.vertical_offset),
        }
    }

    fn retarget(&mut self, target: &VisualParams) {
        self.size.retarget(target.size);
        self.opacity.retarget(target.opacity);
        self.offset.retarget(target.vertical_offset);
    }

    fn tick(&mut self, dt: Duration) {
        self.size.tick(dt);
        self.opacity.tick(dt);
        self.offset.tick(dt);
    }

    fn params(&self) -> VisualParams {
        VisualParams {
            size: self.size.value(),
            opacity: self.opacity.value(),
            vertical_offset: self.offset.value(),
        }
    }

    fn is_settled(&self) -> bool {
        self.size.is_complete() && self.opacity.is_complete() && self.offset.is_complete()
    }
}

/// Schedules smooth interpolation of per-tile visual parameters.
///
/// Driven by the host's rendering clock via [`tick`](Self::tick); holds no
/// authoritative state and never blocks event handling.
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    tiles: Vec<TileMotion>,
    config: TransitionConfig,
}

impl TransitionCoordinator {
    /// Create an empty coordinator.
    #[must_use]
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            tiles: Vec::new(),
            config,
        }
    }

    /// Retarget all tiles toward `targets`, growing or shrinking the table
    /// to match. New tiles are seeded settled at their target.
    pub fn sync(&mut self, targets: &[VisualParams]) {
        self.tiles.truncate(targets.len());
        for (tile, target) in self.tiles.iter_mut().zip(targets) {
            tile.retarget(target);
        }
        for target in &targets[self.tiles.len()..] {
            self.tiles.push(TileMotion::seeded(target, &self.config));
        }
    }

    /// Advance all in-flight interpolations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for tile in &mut self.tiles {
            tile.tick(dt);
        }
    }

    /// Current interpolated parameters for the tile at `index`.
    #[must_use]
    pub fn params(&self, index: usize) -> Option<VisualParams> {
        self.tiles.get(index).map(TileMotion::params)
    }

    /// Whether every tile has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tiles.iter().all(TileMotion::is_settled)
    }

    /// Number of tracked tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tiles are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
