//! A headless slide-track motion engine for draggable carousels.
//!
//! For the frame-driven parts (tweens, momentum, drag orchestration), see the
//! `slidetrack-adapter` crate.
//!
//! This crate focuses on the core state and math a carousel needs: an
//! immutable geometry snapshot (index/position formulas, per-slide visual
//! offsets), the position/index state machine with its boundary policies
//! (hard clamp, rubberband resistance, infinite loop), and a drag velocity
//! estimator.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - container size, slide count, slides-per-view and spacing
//! - sign/axis-adjusted drag deltas with timestamps
//!
//! and to render from the emitted slide positions; the engine never touches
//! styles or elements.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod geometry;
mod options;
mod track;
mod types;
mod velocity;

#[cfg(test)]
mod tests;

pub use geometry::{Geometry, GeometryInput};
pub use options::{OnEventCallback, TrackOptions};
pub use track::Track;
pub use types::{Direction, DragMode, MoveKind, SlidePosition, TrackDetails, TrackEvent};
pub use velocity::VelocityTracker;
