#![forbid(unsafe_code)]

//! Magnification model: per-tile scale as a function of hover distance.
//!
//! A pure mapping from `(index, hovered_index)` to a tile size, configured by
//! a [`Falloff`] policy. With no hovered index every tile renders at base
//! size.
//!
//! # Invariants
//!
//! 1. Factor is exactly 1.0 at distance 0.
//! 2. Factor is monotone non-increasing in distance.
//! 3. Factor is 0.0 for distances at or beyond
//!    [`influence_radius`](Falloff::influence_radius).

use dockline_core::animation::lerp;

/// How magnification decays with distance from the hovered index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Falloff {
    /// Linear decay: `factor = max(0, 1 - d * k)`.
    Linear {
        /// Decay per step of distance. Clamped to a positive minimum on
        /// construction via [`Falloff::linear`].
        k: f32,
    },
    /// Quadratic decay with a hard cutoff: inside `radius`,
    /// `factor = (1 - d/radius)^2`; beyond it, 0.
    Quadratic {
        /// Maximum influence radius in tiles. At least 1.
        radius: usize,
    },
}

impl Falloff {
    /// Linear falloff with decay constant `k` (clamped to a small positive
    /// minimum so the influence radius stays finite).
    #[must_use]
    pub fn linear(k: f32) -> Self {
        Self::Linear { k: k.max(1e-3) }
    }

    /// Quadratic falloff with the given influence radius (minimum 1).
    #[must_use]
    pub fn quadratic(radius: usize) -> Self {
        Self::Quadratic {
            radius: radius.max(1),
        }
    }

    /// Magnification factor in [0.0, 1.0] at `distance` tiles from the
    /// hovered index.
    #[must_use]
    pub fn factor(&self, distance: usize) -> f32 {
        match *self {
            Self::Linear { k } => (1.0 - distance as f32 * k).max(0.0),
            Self::Quadratic { radius } => {
                if distance > radius {
                    0.0
                } else {
                    let normalized = 1.0 - distance as f32 / radius as f32;
                    normalized * normalized
                }
            }
        }
    }

    /// Smallest distance at which the factor reaches 0.
    #[must_use]
    pub fn influence_radius(&self) -> usize {
        match *self {
            Self::Linear { k } => (1.0 / k.max(1e-3)).ceil() as usize,
            Self::Quadratic { radius } => radius,
        }
    }
}

impl Default for Falloff {
    /// Quadratic falloff over 3 tiles.
    fn default() -> Self {
        Self::Quadratic { radius: 3 }
    }
}

/// Compute a tile's size given the hovered index.
///
/// Returns `base` when nothing is hovered, `hover` at the hovered index, and
/// a falloff-weighted blend in between.
#[must_use]
pub fn magnify(
    index: usize,
    hovered: Option<usize>,
    base: f32,
    hover: f32,
    falloff: Falloff,
) -> f32 {
    let Some(hovered) = hovered else {
        return base;
    };
    let factor = falloff.factor(index.abs_diff(hovered));
    lerp(base, hover, factor)
}
