use slidetrack::{Direction, DragMode, Track};

/// The movement a released drag should turn into.
///
/// `duration_ms: None` means "use the configured default duration".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRequest {
    pub distance: f64,
    pub duration_ms: Option<f64>,
}

impl MoveRequest {
    fn settle(distance: f64) -> Self {
        Self {
            distance,
            duration_ms: None,
        }
    }
}

/// Computes the end-of-drag movement for the track's configured policy.
///
/// `touch_index_start` is the committed index recorded when the gesture
/// began; snap mode navigates relative to it so a long drag still advances
/// exactly one slide.
pub fn end_of_drag(track: &Track, touch_index_start: i64) -> MoveRequest {
    match track.options().drag_mode {
        DragMode::Snap => snap(track, touch_index_start),
        DragMode::Free => free(track),
        DragMode::FreeSnap => free_snap(track),
    }
}

/// Friction at a given release speed: `option * sqrt(|speed|)`.
pub fn friction_at(option: f64, speed: f64) -> f64 {
    option * speed.abs().sqrt()
}

/// How far a release at `speed` coasts before friction consumes it.
pub fn coast_distance(speed: f64, friction: f64) -> f64 {
    speed * speed / friction * speed.signum()
}

fn snap(track: &Track, touch_index_start: i64) -> MoveRequest {
    let direction = track.direction();
    let target = if track.geometry().slides_per_view() == 1.0 && direction != Direction::Still {
        touch_index_start + direction.offset()
    } else {
        track.current_idx() + direction.offset()
    };
    MoveRequest::settle(track.calculate_index_distance(target))
}

fn free(track: &Track) -> MoveRequest {
    let speed = track.speed();
    if speed == 0.0 {
        let is_out_of_bounds = track.calculate_out_of_bounds_offset(0.0) != 0.0;
        return if is_out_of_bounds && !track.options().is_loop {
            MoveRequest::settle(track.current_index_distance())
        } else {
            MoveRequest::settle(0.0)
        };
    }

    let friction = friction_at(track.options().default_friction, speed);
    MoveRequest {
        distance: coast_distance(speed, friction),
        duration_ms: Some((speed / friction).abs() * 6.0),
    }
}

fn free_snap(track: &Track) -> MoveRequest {
    let speed = track.speed();
    if speed == 0.0 {
        return MoveRequest::settle(track.current_index_distance());
    }

    let friction = friction_at(track.options().default_friction, speed);
    let distance = coast_distance(speed, friction);
    // Round the projected landing point to a slide boundary in the direction
    // of travel, so the coast still rests exactly on a slide.
    let trend = track
        .geometry()
        .calculate_index_trend(track.position() + distance);
    let idx = if track.direction() == Direction::Backward {
        trend.floor()
    } else {
        trend.ceil()
    } as i64;
    MoveRequest {
        distance: track.geometry().calculate_index_position(idx) - track.position(),
        duration_ms: Some((speed / friction).abs() * 6.0),
    }
}
