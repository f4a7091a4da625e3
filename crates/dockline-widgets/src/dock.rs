#![forbid(unsafe_code)]

//! The dock facade: state machine + transition coordinator + renderer.
//!
//! [`Dock`] is the single object a host embeds. The host feeds it pointer
//! events and layout bounds, ticks it from the rendering clock, and calls
//! [`render`](Dock::render) with its [`TileRenderer`] whenever
//! [`take_changed`](Dock::take_changed) reports a change or transitions are
//! still in flight.
//!
//! ```
//! use std::time::Duration;
//! use dockline_core::event::PointerEvent;
//! use dockline_core::geometry::Rect;
//! use dockline_widgets::{Dock, DockConfig, VisualParams};
//!
//! let mut dock = Dock::new(vec!["files", "mail", "music"], DockConfig::default());
//! dock.set_bounds(Rect::new(0.0, 0.0, 300.0, 80.0));
//! dock.handle_event(&PointerEvent::PointerEnter { index: 1 });
//! dock.tick(Duration::from_millis(16));
//!
//! let mut sizes = Vec::new();
//! dock.render(&mut |_: usize, _: &&str, params: &VisualParams| {
//!     sizes.push(params.size);
//! });
//! assert_eq!(sizes.len(), 3);
//! ```

use std::time::Duration;

use web_time::Instant;

use dockline_core::event::PointerEvent;
use dockline_core::geometry::Rect;

use crate::TileRenderer;
use crate::magnify::Falloff;
use crate::state::{DockState, Phase};
use crate::transition::{TransitionConfig, TransitionCoordinator, visual_targets};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Layout and magnification parameters for a dock.
#[derive(Debug, Clone, Copy)]
pub struct DockConfig {
    /// Tile size with no hover (default: 48).
    pub base_size: f32,
    /// Tile size directly under the pointer (default: 72).
    pub hover_size: f32,
    /// Fixed inter-item gap allowance used for slot resolution (default: 8).
    pub gap: f32,
    /// Magnification decay policy.
    pub falloff: Falloff,
    /// Lift divisor: hovered tiles rise by `size / lift_divisor`
    /// (default: 8).
    pub lift_divisor: f32,
    /// Transition timing shared by all tiles.
    pub transition: TransitionConfig,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            base_size: 48.0,
            hover_size: 72.0,
            gap: 8.0,
            falloff: Falloff::default(),
            lift_divisor: 8.0,
            transition: TransitionConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dock
// ---------------------------------------------------------------------------

/// A horizontal row of reorderable, magnifying tiles.
///
/// Generic over the item type `T`; the dock treats items as opaque and only
/// hands them back to the host's [`TileRenderer`].
#[derive(Debug)]
pub struct Dock<T> {
    state: DockState<T>,
    coordinator: TransitionCoordinator,
    config: DockConfig,
    changed: bool,
    last_tick: Option<Instant>,
}

impl<T> Dock<T> {
    /// Create a dock seeded with `items`.
    #[must_use]
    pub fn new(items: Vec<T>, config: DockConfig) -> Self {
        let state = DockState::new(items, config.gap);
        let mut coordinator = TransitionCoordinator::new(config.transition);
        coordinator.sync(&visual_targets(&state, &config));
        Self {
            state,
            coordinator,
            config,
            changed: true,
            last_tick: None,
        }
    }

    /// Process one pointer event; returns `true` if state changed.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let changed = self.state.handle(event);
        if changed {
            self.sync_targets();
        }
        changed
    }

    /// Supply the dock's bounding box from the host layout system.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.state.set_bounds(bounds) {
            self.changed = true;
        }
    }

    /// Advance in-flight transitions by `dt`.
    ///
    /// Returns `true` while any transition is still running (the host should
    /// keep scheduling frames).
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.coordinator.tick(dt);
        !self.coordinator.is_settled()
    }

    /// [`tick`](Self::tick) with `dt` measured from the previous call on the
    /// host's wall clock.
    pub fn tick_now(&mut self) -> bool {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_tick = Some(now);
        self.tick(dt)
    }

    /// Render every tile in list order through the host's renderer.
    pub fn render<R: TileRenderer<T>>(&mut self, renderer: &mut R) {
        self.changed = false;
        for (index, item) in self.state.items().iter().enumerate() {
            // Coordinator and state are synced on every change; a missing
            // entry can only mean an empty table before first sync.
            if let Some(params) = self.coordinator.params(index) {
                renderer.render_tile(index, item, &params);
            }
        }
    }

    /// Whether state changed since the last [`render`](Self::render) call.
    ///
    /// Clears the flag, so each change is observed once.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Insert an item at `index` (clamped). No-op during an active drag.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        let changed = self.state.insert(index, item);
        if changed {
            self.sync_targets();
        }
        changed
    }

    /// Remove and return the item at `index`. No-op during an active drag.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let item = self.state.remove(index);
        if item.is_some() {
            self.sync_targets();
        }
        item
    }

    /// The items in render order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    /// Current interaction phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Index under the pointer, via hover or drag-over.
    #[inline]
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered()
    }

    /// Whether a drag gesture is active.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Monotonic change counter from the state machine.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Read-only view of the underlying state machine.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &DockState<T> {
        &self.state
    }

    /// The configuration this dock was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    fn sync_targets(&mut self) {
        self.coordinator
            .sync(&visual_targets(&self.state, &self.config));
        self.changed = true;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::VisualParams;
    use dockline_core::geometry::Point;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 500.0, 80.0);
    const MS_500: Duration = Duration::from_millis(500);

    fn dock() -> Dock<&'static str> {
        let mut d = Dock::new(
            vec!["person", "message", "call", "camera", "photo"],
            DockConfig::default(),
        );
        d.set_bounds(BOUNDS);
        d
    }

    fn collect_params(dock: &mut Dock<&'static str>) -> Vec<VisualParams> {
        let mut out = Vec::new();
        dock.render(&mut |_: usize, _: &&str, params: &VisualParams| {
            out.push(*params);
        });
        out
    }

    #[test]
    fn renders_every_item_in_order() {
        let mut d = dock();
        let mut seen = Vec::new();
        d.render(&mut |index: usize, item: &&'static str, _: &VisualParams| {
            seen.push((index, *item));
        });
        assert_eq!(
            seen,
            vec![
                (0, "person"),
                (1, "message"),
                (2, "call"),
                (3, "camera"),
                (4, "photo"),
            ]
        );
    }

    #[test]
    fn change_flag_observed_once() {
        let mut d = dock();
        assert!(d.take_changed()); // construction + bounds
        assert!(!d.take_changed());

        d.handle_event(&PointerEvent::PointerEnter { index: 0 });
        assert!(d.take_changed());
        assert!(!d.take_changed());
    }

    #[test]
    fn hover_then_settle_reaches_hover_size() {
        let mut d = dock();
        d.handle_event(&PointerEvent::PointerEnter { index: 1 });
        assert!(d.tick(Duration::from_millis(16)));

        // Run transitions to completion.
        while d.tick(Duration::from_millis(16)) {}
        let params = collect_params(&mut d);
        assert_eq!(params[1].size, d.config().hover_size);
        assert!(params[1].vertical_offset < 0.0);
        assert_eq!(params[4].size, d.config().base_size);
    }

    #[test]
    fn drag_reorder_reflected_in_render_order() {
        let mut d = dock();
        d.handle_event(&PointerEvent::DragStart { index: 2 });
        let slot_width = BOUNDS.width / 5.0 - d.config().gap;
        d.handle_event(&PointerEvent::DragOverMove(Point::new(
            slot_width * 4.5,
            40.0,
        )));
        d.handle_event(&PointerEvent::DragEnd);

        assert_eq!(
            d.items(),
            &["person", "message", "camera", "photo", "call"]
        );
    }

    #[test]
    fn no_tile_rendered_twice_during_drag() {
        let mut d = dock();
        d.handle_event(&PointerEvent::DragStart { index: 2 });
        d.tick(MS_500);

        let params = collect_params(&mut d);
        let hidden: Vec<usize> = (0..params.len())
            .filter(|&i| params[i].opacity == 0.0)
            .collect();
        assert_eq!(hidden, vec![2]);
        assert_eq!(params.len(), d.items().len());
    }

    #[test]
    fn drop_outside_collapses_then_restores() {
        let mut d = dock();
        d.handle_event(&PointerEvent::DragStart { index: 0 });
        d.handle_event(&PointerEvent::DragUpdate(Point::new(-300.0, -300.0)));
        d.tick(MS_500);

        let params = collect_params(&mut d);
        assert_eq!(params[0].size, 0.0);
        assert_eq!(d.items().len(), 5);

        d.handle_event(&PointerEvent::DragEnd);
        d.tick(MS_500);
        let params = collect_params(&mut d);
        assert_eq!(params[0].size, d.config().base_size);
        assert_eq!(params[0].opacity, 1.0);
        assert_eq!(d.phase(), Phase::Idle);
    }

    #[test]
    fn tick_reports_settled() {
        let mut d = dock();
        assert!(!d.tick(Duration::from_millis(16)));

        d.handle_event(&PointerEvent::PointerEnter { index: 2 });
        assert!(d.tick(Duration::from_millis(16)));
        assert!(!d.tick(MS_500));
    }

    #[test]
    fn insert_and_remove_resize_coordinator() {
        let mut d = dock();
        d.insert(5, "terminal");
        let params = collect_params(&mut d);
        assert_eq!(params.len(), 6);
        // New tile mounts settled at base size.
        assert_eq!(params[5].size, d.config().base_size);

        d.remove(5);
        let params = collect_params(&mut d);
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn tick_now_first_call_is_zero_dt() {
        let mut d = dock();
        d.handle_event(&PointerEvent::PointerEnter { index: 0 });
        // First call establishes the clock; transitions still pending.
        assert!(d.tick_now());
    }
}
