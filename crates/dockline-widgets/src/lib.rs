#![forbid(unsafe_code)]

//! Dock widget for Dockline: a horizontal row of reorderable tiles with
//! pointer-driven magnification and eased visual transitions.
//!
//! The crate is layered leaf-to-root:
//!
//! - [`resolver`] — pointer coordinates → slot index, bounds testing.
//! - [`magnify`] — per-tile scale as a function of hover distance.
//! - [`reorder`] — the single atomic move operation on the item list.
//! - [`state`] — the interaction state machine driving the above.
//! - [`transition`] — per-tile visual parameters and their interpolation.
//! - [`dock`] — the [`Dock`](dock::Dock) facade wiring it all together.
//!
//! Tile content rendering is out of scope: the host supplies a
//! [`TileRenderer`] and the dock calls it once per item with computed
//! size/opacity/offset.

pub mod dock;
pub mod magnify;
pub mod reorder;
pub mod resolver;
pub mod state;
pub mod transition;

pub use dock::{Dock, DockConfig};
pub use magnify::Falloff;
pub use state::{DockState, Phase};
pub use transition::{TransitionConfig, VisualParams};

/// Renders one tile's visual content at a computed size and offset.
///
/// The dock never draws tiles itself; it invokes the renderer once per item,
/// in list order, on every [`Dock::render`](dock::Dock::render) call.
pub trait TileRenderer<T> {
    /// Draw the tile for `item` (currently at `index`) with `params`.
    fn render_tile(&mut self, index: usize, item: &T, params: &VisualParams);
}

/// Closures of the right shape are tile renderers.
impl<T, F> TileRenderer<T> for F
where
    F: FnMut(usize, &T, &VisualParams),
{
    fn render_tile(&mut self, index: usize, item: &T, params: &VisualParams) {
        self(index, item, params);
    }
}
