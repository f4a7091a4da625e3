#![forbid(unsafe_code)]

//! Core: pointer events, float geometry, and animation primitives.
//!
//! # Role in Dockline
//! `dockline-core` is the input-independent layer. It owns the canonical
//! pointer event types, continuous-space geometry, and the restartable
//! interpolation primitives that the widget layer consumes.
//!
//! # Primary responsibilities
//! - **Event**: canonical pointer/drag events (enter, exit, drag lifecycle).
//! - **Geometry**: float-precision points and rectangles for hit testing.
//! - **Animation**: the [`animation::Animation`] trait, easing curves, and
//!   [`animation::Tween`] — a retargetable scalar interpolation.
//!
//! # How it fits in the system
//! The widget layer (`dockline-widgets`) consumes `dockline-core` events and
//! drives the dock state machine. Rendering is independent of this crate; the
//! host's input layer is the only producer of [`event::PointerEvent`] values.

pub mod animation;
pub mod event;
pub mod geometry;
