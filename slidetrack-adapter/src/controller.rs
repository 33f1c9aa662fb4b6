use slidetrack::{MoveKind, Track, TrackDetails, TrackOptions};

use crate::drag::end_of_drag;
use crate::tween::{Animation, Control, Easing, Frame};

/// Friction coefficient for the rubberband bounce-out.
const RUBBERBAND_FRICTION: f64 = 0.04;

/// What to chain when the current tween runs to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AfterComplete {
    /// Start the rubberband recovery tween back to the nearest valid index.
    SnapBack,
}

/// A framework-neutral controller that wraps a [`slidetrack::Track`] and
/// drives all frame-based motion: snap/free/free-snap end-of-drag movement,
/// rubberband recovery, and programmatic navigation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - the `on_drag_*` methods when normalized pointer events occur
/// - `tick(now_ms)` once per frame while motion may be in progress
///
/// All time flows through `now_ms` arguments (milliseconds, same clock as the
/// drag timestamps), so the controller is deterministic and trivially
/// testable without a real frame scheduler.
#[derive(Clone, Debug)]
pub struct Controller {
    track: Track,
    animation: Animation,
    /// Apply the running tween even through boundary overflow. Set for index
    /// targets (which are valid resting positions by definition) and for
    /// rubberband phases.
    force_finish: bool,
    after_complete: Option<AfterComplete>,
    touch_index_start: i64,
    is_dragging: bool,
}

impl Controller {
    pub fn new(options: TrackOptions) -> Self {
        Self::from_track(Track::new(options))
    }

    pub fn from_track(track: Track) -> Self {
        Self {
            touch_index_start: track.current_idx(),
            track,
            animation: Animation::new(),
            force_finish: false,
            after_complete: None,
            is_dragging: false,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut Track {
        &mut self.track
    }

    pub fn into_track(self) -> Track {
        self.track
    }

    pub fn details(&self) -> TrackDetails {
        self.track.details()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn cancel_animation(&mut self) {
        self.animation.cancel();
        self.force_finish = false;
        self.after_complete = None;
    }

    /// Replaces the container size after a resize observation.
    ///
    /// A running tween's remaining distance is meaningless under the new
    /// geometry, so it is cancelled before the track re-derives its position
    /// from the committed index.
    pub fn resize(&mut self, container_size: f64) {
        self.cancel_animation();
        self.track.resize(container_size);
    }

    /// Replaces the track options wholesale (cancels any running tween).
    pub fn set_options(&mut self, options: TrackOptions) {
        self.cancel_animation();
        self.track.set_options(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackOptions)) {
        self.cancel_animation();
        self.track.update_options(f);
    }

    /// Animates to the next slide.
    pub fn next(&mut self) {
        self.move_to_idx(self.track.current_idx() + 1, None);
    }

    /// Animates to the previous slide.
    pub fn prev(&mut self) {
        self.move_to_idx(self.track.current_idx() - 1, None);
    }

    /// Animates to a slide index.
    ///
    /// Always finishes: an index target is by definition a valid resting
    /// position (non-loop targets are clamped by the geometry), so boundary
    /// interpolation is unnecessary.
    pub fn move_to_idx(&mut self, idx: i64, duration_ms: Option<f64>) {
        let distance = self.track.calculate_index_distance(idx);
        tdebug!(idx, distance, "move_to_idx");
        let duration_ms = duration_ms.unwrap_or(self.track.options().default_duration_ms);
        self.start_tween(distance, duration_ms, Easing::EaseOutQuint, true, None);
    }

    /// Animates to a slide resolved relative to the current one.
    ///
    /// In loop mode the target is modular; `nearest` picks the shorter wrap
    /// direction. Non-loop targets resolve like [`Controller::move_to_idx`].
    pub fn move_to_idx_relative(&mut self, idx: i64, nearest: bool, duration_ms: Option<f64>) {
        let target = if self.track.options().is_loop {
            self.track.get_relative_idx(idx, nearest)
        } else {
            idx
        };
        self.move_to_idx(target, duration_ms);
    }

    /// Starts an explicit movement tween (boundary-sensitive).
    pub fn move_to(&mut self, distance: f64, duration_ms: Option<f64>) {
        let duration_ms = duration_ms.unwrap_or(self.track.options().default_duration_ms);
        self.start_tween(distance, duration_ms, Easing::EaseOutQuint, false, None);
    }

    /// Call when a pointer goes down on the track.
    ///
    /// Cancels any running tween (the sole mutual-exclusion discipline: at
    /// most one movement source is active) and records the index the gesture
    /// started on.
    pub fn on_drag_start(&mut self, now_ms: f64) {
        self.cancel_animation();
        self.touch_index_start = self.track.current_idx();
        self.is_dragging = true;
        self.track.measure_speed(0.0, now_ms);
        tdebug!(touch_index_start = self.touch_index_start, "drag start");
    }

    /// Call when the pointer first actually moves after going down.
    pub fn on_first_drag(&mut self) {
        self.track.reset_speed_tracking();
    }

    /// Applies one sign/axis-adjusted drag delta.
    pub fn on_drag(&mut self, distance: f64, now_ms: f64) {
        self.track.measure_speed(distance, now_ms);
        self.track.move_by(distance, MoveKind::Drag);
    }

    /// Call when the pointer is released; starts the end-of-drag movement for
    /// the configured policy.
    pub fn on_drag_stop(&mut self) {
        self.is_dragging = false;
        let request = end_of_drag(&self.track, self.touch_index_start);
        tdebug!(
            distance = request.distance,
            duration_ms = request.duration_ms,
            "drag stop"
        );
        let duration_ms = request
            .duration_ms
            .unwrap_or(self.track.options().default_duration_ms);
        self.start_tween(request.distance, duration_ms, Easing::EaseOutQuint, false, None);
    }

    /// Advances the controller by one frame.
    ///
    /// Runs the velocity idle decay, then the active tween (if any): applies
    /// the frame's delta through the track, diverting into the boundary
    /// policy when the movement would overflow. Returns the track position
    /// when a tween advanced this frame, `None` when idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        self.track.poll_velocity(now_ms);
        match self.animation.step(now_ms) {
            Frame::Idle => None,
            Frame::Complete { remaining } => {
                self.track.move_by(remaining, MoveKind::Animated);
                if self.after_complete.take() == Some(AfterComplete::SnapBack) {
                    self.start_recovery();
                }
                Some(self.track.position())
            }
            Frame::Move { delta } => {
                self.apply_frame(delta);
                Some(self.track.position())
            }
        }
    }

    fn apply_frame(&mut self, delta: f64) {
        let offset = self.track.calculate_out_of_bounds_offset(delta);
        let is_rubberband = self.track.options().is_rubberband();
        let is_loop = self.track.options().is_loop;

        if offset != 0.0 && !self.force_finish {
            if !is_rubberband && !is_loop {
                // Hard boundary: rest exactly at the edge.
                self.animation.resolve(delta, Control::Stop);
                self.after_complete = None;
                self.track.move_by(delta - offset, MoveKind::Animated);
                return;
            }
            if is_rubberband {
                // Redirect mid-flight into the rubberband phase.
                self.animation.resolve(delta, Control::Stop);
                self.after_complete = None;
                self.move_rubberband(self.track.speed());
                return;
            }
            // Loop mode wraps instead of overflowing; fall through.
        }

        self.track.move_by(delta, MoveKind::Animated);
        self.animation.resolve(delta, Control::Continue);
    }

    /// Coasts past the edge under heavy friction, then snaps back.
    fn move_rubberband(&mut self, speed: f64) {
        if speed == 0.0 {
            // The friction curve is undefined at rest; settle directly.
            self.move_to_idx(self.track.current_idx(), None);
            return;
        }

        let friction = RUBBERBAND_FRICTION * speed.abs().sqrt();
        let distance = speed * speed / friction * speed.signum();
        let duration_ms = (speed / friction).abs() * 3.0;
        tdebug!(speed, distance, duration_ms, "rubberband");
        self.start_tween(
            distance,
            duration_ms,
            Easing::EaseOutCubic,
            true,
            Some(AfterComplete::SnapBack),
        );
    }

    /// The recovery phase back to the nearest valid index position.
    ///
    /// Ignores further boundary checks: it is the movement that resolves the
    /// violation.
    fn start_recovery(&mut self) {
        let distance = self.track.current_index_distance();
        let duration_ms = self.track.options().default_duration_ms;
        self.start_tween(distance, duration_ms, Easing::EaseOutCubic, true, None);
    }

    fn start_tween(
        &mut self,
        distance: f64,
        duration_ms: f64,
        easing: Easing,
        force_finish: bool,
        after_complete: Option<AfterComplete>,
    ) {
        self.animation.cancel();
        self.force_finish = force_finish;
        self.after_complete = after_complete;
        self.animation.start(distance, duration_ms, easing);
    }
}
