//! Frame-driven motion orchestration for the `slidetrack` crate.
//!
//! The `slidetrack` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the time-based parts a carousel adapter needs:
//!
//! - a generic, poll-driven tween engine with explicit cancellation
//! - end-of-drag decision logic (snap / free / free-snap)
//! - a controller wiring drag lifecycle, momentum and rubberband recovery
//!
//! This crate is intentionally framework-agnostic: no DOM, no event loop. An
//! adapter feeds it normalized drag deltas and calls `tick(now_ms)` from its
//! own frame scheduler.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod drag;
mod tween;


pub use controller::Controller;
pub use drag::{MoveRequest, coast_distance, end_of_drag, friction_at};
pub use tween::{Animation, Control, Easing, Frame, TweenState};
