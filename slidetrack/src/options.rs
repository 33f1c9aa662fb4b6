use std::sync::Arc;

use crate::geometry::GeometryInput;
use crate::track::Track;
use crate::{DragMode, TrackEvent};

/// A listener fired synchronously for every [`TrackEvent`].
///
/// The track itself is passed alongside the event so listeners can read
/// `slide_positions()`/`details()` without the event carrying copies.
pub type OnEventCallback = Arc<dyn Fn(&Track, &TrackEvent) + Send + Sync>;

/// Configuration for a [`Track`].
///
/// Cheap to clone: the event callback is stored in an `Arc`. A track rebuilds
/// its geometry snapshot wholesale whenever the options are replaced, so
/// adapters can update a few fields and call `Track::set_options` without
/// worrying about partially applied geometry.
pub struct TrackOptions {
    /// Container size along the scroll axis, in pixels.
    pub container_size: f64,
    pub number_of_slides: usize,
    /// Slides visible at once; may be fractional.
    pub slides_per_view: f64,
    /// Space between slides, in pixels.
    pub spacing: f64,
    /// Wrap the track modulo its length instead of having edges.
    pub is_loop: bool,
    pub is_rtl: bool,
    pub is_centered: bool,
    /// Resist but allow overscroll at the edges. Ignored in loop mode.
    pub rubberband: bool,
    pub initial_index: i64,
    /// End-of-drag motion policy.
    pub drag_mode: DragMode,
    /// Duration for snap and programmatic moves, in milliseconds.
    pub default_duration_ms: f64,
    /// Friction coefficient for free and free-snap coasting.
    pub default_friction: f64,
    /// Optional listener for index/move notifications.
    pub on_event: Option<OnEventCallback>,
}

impl TrackOptions {
    pub fn new(container_size: f64, number_of_slides: usize) -> Self {
        Self {
            container_size,
            number_of_slides,
            slides_per_view: 1.0,
            spacing: 0.0,
            is_loop: false,
            is_rtl: false,
            is_centered: false,
            rubberband: true,
            initial_index: 0,
            drag_mode: DragMode::Snap,
            default_duration_ms: 500.0,
            default_friction: 0.0025,
            on_event: None,
        }
    }

    /// Whether drag deltas get rubberband resistance at the edges.
    ///
    /// Loop mode has no edges, so it always wins over the rubberband flag.
    pub fn is_rubberband(&self) -> bool {
        self.rubberband && !self.is_loop
    }

    pub(crate) fn geometry_input(&self) -> GeometryInput {
        GeometryInput {
            container_size: self.container_size,
            number_of_slides: self.number_of_slides,
            slides_per_view: self.slides_per_view,
            spacing: self.spacing,
            is_loop: self.is_loop,
            is_rtl: self.is_rtl,
            is_centered: self.is_centered,
        }
    }

    pub fn with_slides_per_view(mut self, slides_per_view: f64) -> Self {
        self.slides_per_view = slides_per_view;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_loop(mut self, is_loop: bool) -> Self {
        self.is_loop = is_loop;
        self
    }

    pub fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn with_centered(mut self, is_centered: bool) -> Self {
        self.is_centered = is_centered;
        self
    }

    pub fn with_rubberband(mut self, rubberband: bool) -> Self {
        self.rubberband = rubberband;
        self
    }

    pub fn with_initial_index(mut self, initial_index: i64) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_drag_mode(mut self, drag_mode: DragMode) -> Self {
        self.drag_mode = drag_mode;
        self
    }

    pub fn with_default_duration_ms(mut self, default_duration_ms: f64) -> Self {
        self.default_duration_ms = default_duration_ms;
        self
    }

    pub fn with_default_friction(mut self, default_friction: f64) -> Self {
        self.default_friction = default_friction;
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&Track, &TrackEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for TrackOptions {
    fn clone(&self) -> Self {
        Self {
            container_size: self.container_size,
            number_of_slides: self.number_of_slides,
            slides_per_view: self.slides_per_view,
            spacing: self.spacing,
            is_loop: self.is_loop,
            is_rtl: self.is_rtl,
            is_centered: self.is_centered,
            rubberband: self.rubberband,
            initial_index: self.initial_index,
            drag_mode: self.drag_mode,
            default_duration_ms: self.default_duration_ms,
            default_friction: self.default_friction,
            on_event: self.on_event.clone(),
        }
    }
}

impl core::fmt::Debug for TrackOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackOptions")
            .field("container_size", &self.container_size)
            .field("number_of_slides", &self.number_of_slides)
            .field("slides_per_view", &self.slides_per_view)
            .field("spacing", &self.spacing)
            .field("is_loop", &self.is_loop)
            .field("is_rtl", &self.is_rtl)
            .field("is_centered", &self.is_centered)
            .field("rubberband", &self.rubberband)
            .field("initial_index", &self.initial_index)
            .field("drag_mode", &self.drag_mode)
            .field("default_duration_ms", &self.default_duration_ms)
            .field("default_friction", &self.default_friction)
            .finish_non_exhaustive()
    }
}
