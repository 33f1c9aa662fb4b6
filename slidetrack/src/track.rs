use crate::geometry::Geometry;
use crate::velocity::VelocityTracker;
use crate::{Direction, MoveKind, SlidePosition, TrackDetails, TrackEvent, TrackOptions};

/// The position/index state machine for the slide scroll axis.
///
/// A track owns a continuous `position` (pixels along the scroll axis), a
/// committed discrete `current_idx`, and the per-slide visual placements
/// derived from them. All state changes flow through [`Track::move_by`]; the
/// only side effects are the synchronous [`TrackEvent`] notifications, so the
/// track never touches any UI.
///
/// `position` may transiently leave `[0, track_length]` during a drag or an
/// animation. The committed index never does (non-loop): an out-of-bounds
/// index is simply not committed, so position and index can legitimately
/// diverge while overscrolled.
#[derive(Clone, Debug)]
pub struct Track {
    options: TrackOptions,
    geometry: Geometry,
    velocity: VelocityTracker,
    position: f64,
    current_idx: i64,
    progress: f64,
    slide_positions: Vec<SlidePosition>,
}

impl Track {
    /// Creates a track and aligns it with the resting position of
    /// `options.initial_index`.
    ///
    /// The alignment runs through the normal move path, so a registered
    /// listener receives the initial `Moved` notification (and an
    /// `IndexChanged` if the initial index had to be clamped).
    pub fn new(options: TrackOptions) -> Self {
        let geometry = Geometry::new(options.geometry_input());
        tdebug!(
            number_of_slides = options.number_of_slides,
            is_loop = options.is_loop,
            initial_index = options.initial_index,
            "Track::new"
        );
        let mut track = Self {
            current_idx: options.initial_index,
            geometry,
            velocity: VelocityTracker::new(),
            position: 0.0,
            progress: 0.0,
            slide_positions: Vec::new(),
            options,
        };
        track.reposition();
        track
    }

    pub fn options(&self) -> &TrackOptions {
        &self.options
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn current_idx(&self) -> i64 {
        self.current_idx
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn slide_positions(&self) -> &[SlidePosition] {
        &self.slide_positions
    }

    pub fn speed(&self) -> f64 {
        self.velocity.speed()
    }

    pub fn direction(&self) -> Direction {
        self.velocity.direction()
    }

    /// Replaces the options and rebuilds the geometry snapshot wholesale.
    ///
    /// The committed index is clamped (non-loop) and the position re-derived
    /// from it before any subsequent move is accepted, so the track never
    /// operates on a stale geometry snapshot.
    pub fn set_options(&mut self, options: TrackOptions) {
        self.options = options;
        self.geometry = Geometry::new(self.options.geometry_input());
        tdebug!(
            number_of_slides = self.options.number_of_slides,
            container_size = self.options.container_size,
            "Track::set_options"
        );
        self.reposition();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Track::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Applies a new container size (e.g. after a resize observation).
    pub fn resize(&mut self, container_size: f64) {
        self.update_options(|o| o.container_size = container_size);
    }

    /// Applies a movement delta.
    ///
    /// Drag deltas on a non-loop track are first run through the boundary
    /// policy ([`Track::adjust_drag_movement`]); animated/programmatic deltas
    /// are applied unmodified because the caller resolves boundaries itself.
    ///
    /// Commits a new index only when it differs from the current one *and*
    /// lies inside the slide range (non-loop), then recomputes progress and
    /// slide positions and notifies listeners.
    pub fn move_by(&mut self, delta: f64, kind: MoveKind) {
        let delta = if kind == MoveKind::Drag && !self.options.is_loop {
            self.adjust_drag_movement(delta)
        } else {
            delta
        };
        self.position += delta;
        ttrace!(delta, position = self.position, "Track::move_by");

        let new_index = self.geometry.calculate_index(self.position);
        if new_index != self.current_idx && !self.is_index_out_of_bounds(new_index) {
            self.current_idx = new_index;
            self.emit(TrackEvent::IndexChanged {
                index: new_index,
                kind,
            });
        }

        self.progress = self.calculate_track_progress(self.position);
        self.slide_positions = self.geometry.calculate_slide_positions(self.progress);
        self.emit(TrackEvent::Moved {
            progress: self.progress,
            kind,
        });
    }

    /// How far `position + delta` would overshoot the usable track.
    ///
    /// Positive past the end, negative before the start, `0.0` when the
    /// resulting position stays inside `[0, track_length]`.
    pub fn calculate_out_of_bounds_offset(&self, delta: f64) -> f64 {
        let new_position = self.position + delta;
        let track_length = self.geometry.track_length();
        if new_position > track_length {
            new_position - track_length
        } else if new_position < 0.0 {
            new_position
        } else {
            0.0
        }
    }

    /// Applies the configured boundary policy to a drag delta.
    ///
    /// Inside the track the delta passes through. Past an edge, rubberband
    /// mode scales it by a quadratic decay of the overflow (resistance grows
    /// with overscroll and never flips the sign); otherwise the delta is cut
    /// so the position stops exactly at the edge.
    pub fn adjust_drag_movement(&self, delta: f64) -> f64 {
        let offset = self.calculate_out_of_bounds_offset(delta);
        if offset == 0.0 {
            delta
        } else if self.options.is_rubberband() {
            let overflow = (offset / self.geometry.width_or_height()).abs().min(1.0);
            delta * (1.0 - overflow) * (1.0 - overflow)
        } else {
            delta - offset
        }
    }

    /// Signed distance from the current position to the resting position of
    /// `idx`.
    pub fn calculate_index_distance(&self, idx: i64) -> f64 {
        self.geometry.calculate_index_position(idx) - self.position
    }

    /// Distance to the resting position of the committed index.
    pub fn current_index_distance(&self) -> f64 {
        self.calculate_index_distance(self.current_idx)
    }

    /// Resolves a (possibly modular) target index relative to the committed
    /// one.
    ///
    /// Both indexes are normalized into `[0, number_of_slides)`; the two wrap
    /// candidates ("left" via the start, "right" via the end) are computed and
    /// one is selected: the minimal-magnitude candidate when `nearest`,
    /// otherwise by the normalized order of target vs. current. With the
    /// latter convention a normalized target below the current slide always
    /// travels backward, regardless of the caller's signed intent.
    pub fn get_relative_idx(&self, idx: i64, nearest: bool) -> i64 {
        let n = self.geometry.number_of_slides() as i64;
        if n == 0 {
            return self.current_idx;
        }
        let relative = idx.rem_euclid(n);
        let current = self.current_idx.rem_euclid(n);

        let left = if current < relative {
            -current - n + relative
        } else {
            relative - current
        };
        let right = if current > relative {
            n - current + relative
        } else {
            relative - current
        };

        let add = if nearest {
            if left.abs() <= right { left } else { right }
        } else if relative < current {
            left
        } else {
            right
        };
        self.current_idx + add
    }

    /// Feeds one drag delta into the velocity estimator.
    pub fn measure_speed(&mut self, delta: f64, now_ms: f64) {
        self.velocity.measure(delta, now_ms);
    }

    /// Runs the velocity idle decay; call once per frame during a gesture.
    pub fn poll_velocity(&mut self, now_ms: f64) {
        self.velocity.poll(now_ms);
    }

    /// Clears the velocity estimator at a gesture-phase transition.
    pub fn reset_speed_tracking(&mut self) {
        self.velocity.reset();
    }

    /// Builds the read-only details snapshot for external collaborators.
    pub fn details(&self) -> TrackDetails {
        let n = self.geometry.number_of_slides();
        let progress_abs = self.progress.abs();
        let progress_track = if self.position < 0.0 {
            1.0 - progress_abs
        } else {
            progress_abs
        };
        // A single slide has no inter-slide progress to report.
        let progress_slides = if n > 1 {
            progress_track * n as f64 / (n as f64 - 1.0)
        } else {
            0.0
        };

        TrackDetails {
            direction: self.velocity.direction(),
            progress_track,
            progress_slides,
            position: self.position,
            speed: self.velocity.speed(),
            relative_slide: self.ensure_index_in_bounds(self.current_idx),
            absolute_slide: self.current_idx,
            size: n,
            slides_per_view: self.geometry.slides_per_view(),
            width_or_height: self.geometry.width_or_height(),
            positions: self.slide_positions.clone(),
        }
    }

    fn reposition(&mut self) {
        self.move_by(self.current_index_distance(), MoveKind::Animated);
    }

    fn calculate_track_progress(&self, position: f64) -> f64 {
        let max_position = self.geometry.max_position();
        if self.options.is_loop {
            (position % max_position) / max_position
        } else {
            position / max_position
        }
    }

    fn is_index_out_of_bounds(&self, idx: i64) -> bool {
        !self.options.is_loop
            && (idx < 0 || idx > self.geometry.number_of_slides() as i64 - 1)
    }

    fn ensure_index_in_bounds(&self, idx: i64) -> i64 {
        let n = self.geometry.number_of_slides() as i64;
        if n == 0 { 0 } else { idx.rem_euclid(n) }
    }

    fn emit(&self, event: TrackEvent) {
        if let Some(on_event) = &self.options.on_event {
            on_event(self, &event);
        }
    }
}
