#![forbid(unsafe_code)]

//! Animation primitives: the [`Animation`] trait, easing curves, and
//! [`Tween`] — a restartable scalar interpolation.
//!
//! Animations are driven by a periodic tick from the host's rendering clock.
//! They are pure value producers: ticking never blocks, never allocates, and
//! never touches authoritative state. The widget layer samples `value()`
//! every frame and feeds the result to its renderer.
//!
//! # Retargeting
//!
//! The distinguishing behavior of [`Tween`] is *continuous retargeting*: a
//! call to [`Tween::retarget`] while an interpolation is in flight samples
//! the current interpolated value and uses it as the new start point. The
//! output curve therefore never jumps, no matter how often targets change.
//!
//! # Invariants
//!
//! 1. `value()` always lies between the current start and target (easing
//!    curves used here do not overshoot).
//! 2. `tick()` never advances `elapsed` past `duration`.
//! 3. `retarget()` with the current target is a no-op (in-flight motion
//!    continues undisturbed).
//! 4. A zero duration is clamped to 1ns; `snap()` is the only way to change
//!    value discontinuously.
//!
//! # Failure Modes
//!
//! - Non-finite targets: accepted but propagate NaN to `value()`; callers
//!   own input sanity.
//! - Very large dt: clamps to completion in one tick (no oscillation).

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// An easing curve: maps linear progress `t` in [0.0, 1.0] to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in: slow start, fast finish.
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: fast start, slow finish.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Smoothstep ease-in-out: slow at both ends.
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-driven value producer.
///
/// Implementors advance on `tick(dt)` and expose their current output via
/// `value()`. Ticking a complete animation is a no-op.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Current output value.
    fn value(&self) -> f32;

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Return the animation to its initial state.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// A retargetable scalar interpolation over a fixed duration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dockline_core::animation::{Animation, Tween, ease_in_out};
///
/// let mut tween = Tween::new(0.0)
///     .with_duration(Duration::from_millis(400))
///     .with_easing(ease_in_out);
///
/// tween.retarget(64.0);
/// tween.tick(Duration::from_millis(200));
/// let midway = tween.value();
/// assert!(midway > 0.0 && midway < 64.0);
///
/// // Retargeting mid-flight starts from the sampled value — no jump.
/// tween.retarget(0.0);
/// assert!((tween.value() - midway).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Tween {
    /// Construction value; [`Animation::reset`] settles back here.
    initial: f32,
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween already settled at `value` (no motion until the first
    /// [`retarget`](Self::retarget)).
    #[must_use]
    pub fn new(value: f32) -> Self {
        let duration = Duration::from_millis(400);
        Self {
            initial: value,
            from: value,
            to: value,
            elapsed: duration,
            duration,
            easing: ease_in_out,
        }
    }

    /// Set the interpolation duration (builder pattern).
    ///
    /// A zero duration is clamped to 1ns to avoid division by zero.
    #[must_use]
    pub fn with_duration(mut self, d: Duration) -> Self {
        self.duration = if d.is_zero() {
            Duration::from_nanos(1)
        } else {
            d
        };
        // Stay settled: a fresh tween must not start moving on its own.
        if self.is_settled_at_target() {
            self.elapsed = self.duration;
        }
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Begin interpolating toward `to` from the current sampled value.
    ///
    /// No-op if `to` equals the current target (in-flight motion continues).
    pub fn retarget(&mut self, to: f32) {
        if (to - self.to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    /// Jump to `to` immediately, without animating.
    pub fn snap(&mut self, to: f32) {
        self.from = to;
        self.to = to;
        self.elapsed = self.duration;
    }

    /// The value being interpolated toward.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    fn is_settled_at_target(&self) -> bool {
        (self.from - self.to).abs() <= f32::EPSILON
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        if self.elapsed >= self.duration {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn value(&self) -> f32 {
        let eased = (self.easing)(self.progress());
        self.from + (self.to - self.from) * eased
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.from = self.initial;
        self.to = self.initial;
        self.elapsed = self.duration;
    }
}

/// Linear interpolation between `a` and `b` by factor `t`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
