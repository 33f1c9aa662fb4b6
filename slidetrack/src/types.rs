/// The sign of the most recent drag movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn from_sign(value: f64) -> Self {
        if value > 0.0 {
            Self::Forward
        } else if value < 0.0 {
            Self::Backward
        } else {
            Self::Still
        }
    }

    /// The index offset this direction contributes (`-1`, `0` or `1`).
    pub fn offset(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }

    pub fn signum(self) -> f64 {
        self.offset() as f64
    }
}

/// End-of-drag motion policy.
///
/// - `Snap`: land on exactly one adjacent slide.
/// - `Free`: coast freely under friction.
/// - `FreeSnap`: coast under friction, but come to rest exactly on a slide
///   boundary in the direction of travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragMode {
    #[default]
    Snap,
    Free,
    FreeSnap,
}

/// Distinguishes user-driven drag deltas from animated/programmatic ones.
///
/// Drag deltas are subject to boundary adjustment (hard clamp or rubberband
/// resistance); animated deltas are applied as-is because the caller resolves
/// boundaries itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Drag,
    Animated,
}

/// The visual placement of one slide for the current track position.
///
/// `distance` is measured in track-widths from the viewport origin; `portion`
/// is the fraction of the slide currently visible, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidePosition {
    pub portion: f64,
    pub distance: f64,
}

/// A read-only snapshot of the full track state, for renderers and debugging.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackDetails {
    pub direction: Direction,
    /// Track progress normalized into `[0, 1]`.
    pub progress_track: f64,
    /// Progress rescaled so the last slide maps to `1.0`.
    ///
    /// Defined as `0.0` when there is only one slide.
    pub progress_slides: f64,
    pub position: f64,
    pub speed: f64,
    /// The committed index normalized into `[0, number_of_slides)`.
    pub relative_slide: i64,
    /// The committed index as-is (may wander outside the slide range in loop
    /// mode).
    pub absolute_slide: i64,
    pub size: usize,
    pub slides_per_view: f64,
    pub width_or_height: f64,
    pub positions: Vec<SlidePosition>,
}

/// A state-change notification emitted synchronously from [`crate::Track`].
///
/// Events are delivered in order, before the triggering call returns. The
/// listener receives the track itself alongside the event, so it can read
/// `slide_positions()` or `details()` without the event carrying them.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackEvent {
    /// The committed slide index changed.
    IndexChanged { index: i64, kind: MoveKind },
    /// The continuous position changed (fires on every `move_by`).
    Moved { progress: f64, kind: MoveKind },
}
