use crate::*;

use std::sync::{Arc, Mutex};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn basic_options() -> TrackOptions {
    // 5 slides, one per view, 100px container, no spacing.
    TrackOptions::new(100.0, 5)
}

fn recording_track(options: TrackOptions) -> (Track, Arc<Mutex<Vec<TrackEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let track = Track::new(options.with_on_event(Some(move |_: &Track, e: &TrackEvent| {
        sink.lock().unwrap().push(e.clone());
    })));
    (track, events)
}

#[test]
fn geometry_derives_basic_values() {
    let g = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 5,
        slides_per_view: 1.0,
        spacing: 0.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    assert!(approx_eq(g.width_or_height(), 100.0));
    assert!(approx_eq(g.size_per_slide(), 100.0));
    assert!(approx_eq(g.max_position(), 500.0));
    assert!(approx_eq(g.track_length(), 400.0));
}

#[test]
fn geometry_track_length_accounts_for_edge_alignment() {
    let edge = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 6,
        slides_per_view: 2.0,
        spacing: 0.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    // size_per_slide = 50; last resting index is n - slides_per_view = 4.
    assert!(approx_eq(edge.size_per_slide(), 50.0));
    assert!(approx_eq(edge.track_length(), 200.0));

    let centered = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 6,
        slides_per_view: 2.0,
        spacing: 0.0,
        is_loop: false,
        is_rtl: false,
        is_centered: true,
    });
    assert!(approx_eq(centered.track_length(), 250.0));
}

#[test]
fn geometry_clamps_slides_per_view_and_spacing() {
    let g = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 3,
        slides_per_view: 10.0,
        spacing: 1000.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    // slides_per_view capped at the slide count; spacing capped relative to
    // the container.
    assert!(approx_eq(g.slides_per_view(), 3.0));
    assert!(g.width_or_height() <= 100.0 + 100.0 / 2.0);
}

#[test]
fn index_position_round_trip() {
    let g = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 5,
        slides_per_view: 1.0,
        spacing: 0.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    for idx in -2..8 {
        let clamped = idx.clamp(0, 4);
        assert_eq!(g.calculate_index(g.calculate_index_position(idx)), clamped);
    }
}

#[test]
fn index_position_round_trip_multi_view() {
    let g = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 5,
        slides_per_view: 2.0,
        spacing: 0.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    // Resting range shrinks to [0, n - slides_per_view] when edge-aligned.
    for idx in 0..5 {
        let clamped = idx.min(3);
        assert_eq!(g.calculate_index(g.calculate_index_position(idx)), clamped);
    }
}

#[test]
fn loop_indexes_pass_through_unclamped() {
    let g = Geometry::new(GeometryInput {
        container_size: 100.0,
        number_of_slides: 5,
        slides_per_view: 1.0,
        spacing: 0.0,
        is_loop: true,
        is_rtl: false,
        is_centered: false,
    });
    assert!(approx_eq(g.calculate_index_position(-2), -200.0));
    assert!(approx_eq(g.calculate_index_position(7), 700.0));
}

#[test]
fn slide_positions_at_rest() {
    let track = Track::new(basic_options());
    let positions = track.slide_positions();
    assert_eq!(positions.len(), 5);
    for (idx, p) in positions.iter().enumerate() {
        assert!(approx_eq(p.distance, idx as f64));
    }
    assert!(approx_eq(positions[0].portion, 1.0));
    for p in &positions[1..] {
        assert!(approx_eq(p.portion, 0.0));
    }
}

#[test]
fn slide_positions_mid_slide() {
    let mut track = Track::new(basic_options());
    track.move_by(50.0, MoveKind::Animated);
    let positions = track.slide_positions();
    // Half of slide 0 has scrolled out, half of slide 1 has scrolled in.
    assert!(approx_eq(positions[0].portion, 0.5));
    assert!(approx_eq(positions[0].distance, -0.5));
    assert!(approx_eq(positions[1].portion, 0.5));
    assert!(approx_eq(positions[1].distance, 0.5));
}

#[test]
fn slide_positions_mirror_for_rtl() {
    let ltr = Track::new(basic_options());
    let rtl = Track::new(basic_options().with_rtl(true));
    let slide_factor = 1.0 / ltr.geometry().slides_per_view();
    for (l, r) in ltr.slide_positions().iter().zip(rtl.slide_positions()) {
        assert!(approx_eq(r.distance, -l.distance + 1.0 - slide_factor));
        assert!(approx_eq(r.portion, l.portion));
    }
}

#[test]
fn slide_positions_wrap_in_loop_mode() {
    let mut track = Track::new(basic_options().with_loop(true));
    // Near the end of the loop the first slides must wrap around in front.
    track.move_by(450.0, MoveKind::Animated);
    let positions = track.slide_positions();
    for p in positions {
        assert!(p.distance <= 4.0 && p.distance >= -4.0);
    }
    // Slide 0 sits half a track-width ahead, not 4.5 widths behind.
    assert!(approx_eq(positions[0].distance, 0.5));
}

#[test]
fn get_slide_position_compensates_spacing() {
    let g = Geometry::new(GeometryInput {
        container_size: 90.0,
        number_of_slides: 4,
        slides_per_view: 2.0,
        spacing: 10.0,
        is_loop: false,
        is_rtl: false,
        is_centered: false,
    });
    let zero = g.get_slide_position(0, SlidePosition { portion: 1.0, distance: 0.0 });
    assert!(approx_eq(zero, 0.0));
    let moved = g.get_slide_position(0, SlidePosition { portion: 1.0, distance: 0.5 });
    assert!(approx_eq(moved, 0.5 * g.width_or_height()));
    // Later slides subtract an index-proportional compensation term.
    let first = g.get_slide_position(1, SlidePosition { portion: 1.0, distance: 0.0 });
    assert!(first < 0.0);
}

#[test]
fn move_commits_index_and_emits_in_order() {
    let (mut track, events) = recording_track(basic_options());
    events.lock().unwrap().clear();

    track.move_by(100.0, MoveKind::Animated);
    let seen = events.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            TrackEvent::IndexChanged {
                index: 1,
                kind: MoveKind::Animated
            },
            TrackEvent::Moved {
                progress: 0.2,
                kind: MoveKind::Animated
            },
        ]
    );
    assert_eq!(track.current_idx(), 1);
}

#[test]
fn out_of_bounds_index_is_never_committed() {
    let mut track = Track::new(basic_options());
    track.move_by(-150.0, MoveKind::Animated);
    // Position and committed index legitimately diverge while overscrolled.
    assert!(approx_eq(track.position(), -150.0));
    assert_eq!(track.current_idx(), 0);
}

#[test]
fn loop_mode_commits_negative_indexes() {
    let mut track = Track::new(basic_options().with_loop(true));
    track.move_by(-150.0, MoveKind::Animated);
    assert_eq!(track.current_idx(), -2);
}

#[test]
fn hard_clamp_keeps_position_inside_track() {
    let mut track = Track::new(basic_options().with_rubberband(false));
    for _ in 0..100 {
        track.move_by(-37.0, MoveKind::Drag);
        assert!(track.position() >= 0.0);
    }
    for _ in 0..100 {
        track.move_by(53.0, MoveKind::Drag);
        assert!(track.position() <= track.geometry().track_length());
    }
}

#[test]
fn rubberband_resists_but_allows_overscroll() {
    let mut track = Track::new(basic_options());
    track.move_by(-10.0, MoveKind::Drag);
    // Past the edge now; every further delta is damped but keeps its sign.
    let mut last_position = track.position();
    assert!(last_position < 0.0);
    for _ in 0..10 {
        let delta = -10.0;
        let adjusted = track.adjust_drag_movement(delta);
        assert!(adjusted < 0.0);
        assert!(adjusted.abs() < delta.abs());
        track.move_by(delta, MoveKind::Drag);
        assert!(track.position() < last_position);
        last_position = track.position();
    }
}

#[test]
fn rubberband_resistance_grows_with_overflow() {
    let mut track = Track::new(basic_options());
    track.move_by(-10.0, MoveKind::Drag);
    let shallow = track.adjust_drag_movement(-10.0).abs();
    track.move_by(-40.0, MoveKind::Drag);
    let deep = track.adjust_drag_movement(-10.0).abs();
    assert!(deep < shallow);
}

#[test]
fn animated_moves_skip_drag_adjustment() {
    let mut track = Track::new(basic_options().with_rubberband(false));
    track.move_by(-150.0, MoveKind::Animated);
    assert!(approx_eq(track.position(), -150.0));
}

#[test]
fn out_of_bounds_offset_reports_overshoot() {
    let mut track = Track::new(basic_options());
    assert!(approx_eq(track.calculate_out_of_bounds_offset(-30.0), -30.0));
    assert!(approx_eq(track.calculate_out_of_bounds_offset(10.0), 0.0));
    track.move_by(390.0, MoveKind::Animated);
    assert!(approx_eq(track.calculate_out_of_bounds_offset(20.0), 10.0));
}

#[test]
fn index_distance_is_signed() {
    let mut track = Track::new(basic_options());
    track.move_by(150.0, MoveKind::Animated);
    assert!(approx_eq(track.calculate_index_distance(3), 150.0));
    assert!(approx_eq(track.calculate_index_distance(0), -150.0));
    assert!(approx_eq(track.current_index_distance(), 50.0));
}

#[test]
fn relative_idx_picks_nearest_wrap() {
    let track = Track::new(basic_options().with_loop(true));
    // current = 0; slide 4 is one step backward through the wrap.
    assert_eq!(track.get_relative_idx(4, true), -1);
    assert_eq!(track.get_relative_idx(1, true), 1);
    // Without `nearest`, normalized order decides: 4 > 0 travels forward.
    assert_eq!(track.get_relative_idx(4, false), 4);
}

#[test]
fn relative_idx_is_anchored_to_current() {
    let mut track = Track::new(basic_options().with_loop(true));
    track.move_by(700.0, MoveKind::Animated);
    assert_eq!(track.current_idx(), 7);
    // Normalized current is 2; nearest slide 1 lies one step backward.
    assert_eq!(track.get_relative_idx(1, true), 6);
}

#[test]
fn velocity_measures_speed_from_sample_window() {
    let mut v = VelocityTracker::new();
    v.measure(10.0, 0.0);
    assert!(approx_eq(v.speed(), 0.0));
    v.measure(10.0, 16.0);
    v.measure(10.0, 32.0);
    // Distance excludes the newest sample; time spans the whole window.
    assert!(approx_eq(v.speed(), 20.0 / 32.0));
    assert_eq!(v.direction(), Direction::Forward);
}

#[test]
fn velocity_is_clamped() {
    let mut v = VelocityTracker::new();
    v.measure(1000.0, 0.0);
    v.measure(1000.0, 1.0);
    assert!(approx_eq(v.speed(), 10.0));
}

#[test]
fn velocity_reversal_discards_history() {
    let mut v = VelocityTracker::new();
    v.measure(10.0, 0.0);
    v.measure(10.0, 16.0);
    assert!(v.speed() > 0.0);
    v.measure(-10.0, 32.0);
    // One sample again after the reversal, so no speed yet.
    assert!(approx_eq(v.speed(), 0.0));
    assert_eq!(v.direction(), Direction::Backward);
}

#[test]
fn velocity_decays_after_idle_window() {
    let mut v = VelocityTracker::new();
    v.measure(10.0, 0.0);
    v.measure(10.0, 16.0);
    assert!(v.speed() > 0.0);
    v.poll(32.0);
    assert!(v.speed() > 0.0);
    v.poll(70.0);
    assert!(approx_eq(v.speed(), 0.0));
}

#[test]
fn stale_history_does_not_leak_into_new_gesture() {
    let mut v = VelocityTracker::new();
    v.measure(10.0, 0.0);
    v.measure(10.0, 16.0);
    // A sample after a long gap starts a fresh window.
    v.measure(10.0, 500.0);
    assert!(approx_eq(v.speed(), 0.0));
}

#[test]
fn velocity_reset_clears_everything() {
    let mut v = VelocityTracker::new();
    v.measure(10.0, 0.0);
    v.measure(10.0, 16.0);
    v.reset();
    assert!(approx_eq(v.speed(), 0.0));
    assert_eq!(v.direction(), Direction::Still);
}

#[test]
fn details_snapshot_reports_track_state() {
    let mut track = Track::new(basic_options());
    track.move_by(100.0, MoveKind::Animated);
    let details = track.details();
    assert!(approx_eq(details.progress_track, 0.2));
    assert!(approx_eq(details.progress_slides, 0.25));
    assert_eq!(details.absolute_slide, 1);
    assert_eq!(details.relative_slide, 1);
    assert_eq!(details.size, 5);
    assert_eq!(details.positions.len(), 5);
    assert!(approx_eq(details.width_or_height, 100.0));
}

#[test]
fn details_normalize_loop_indexes() {
    let mut track = Track::new(basic_options().with_loop(true));
    track.move_by(-100.0, MoveKind::Animated);
    let details = track.details();
    assert_eq!(details.absolute_slide, -1);
    assert_eq!(details.relative_slide, 4);
}

#[test]
fn single_slide_progress_is_defined() {
    let track = Track::new(TrackOptions::new(100.0, 1));
    let details = track.details();
    assert!(approx_eq(details.progress_slides, 0.0));
}

#[test]
fn initial_index_is_applied_at_construction() {
    let track = Track::new(basic_options().with_initial_index(2));
    assert_eq!(track.current_idx(), 2);
    assert!(approx_eq(track.position(), 200.0));
}

#[test]
fn out_of_range_initial_index_is_clamped() {
    let track = Track::new(basic_options().with_initial_index(9));
    assert_eq!(track.current_idx(), 4);
    assert!(approx_eq(track.position(), 400.0));
}

#[test]
fn resize_rebuilds_geometry_and_repositions() {
    let mut track = Track::new(basic_options().with_initial_index(2));
    track.resize(200.0);
    assert!(approx_eq(track.geometry().size_per_slide(), 200.0));
    assert_eq!(track.current_idx(), 2);
    assert!(approx_eq(track.position(), 400.0));
}

#[test]
fn shrinking_slide_count_clamps_committed_index() {
    let mut track = Track::new(basic_options().with_initial_index(4));
    track.update_options(|o| o.number_of_slides = 3);
    assert_eq!(track.current_idx(), 2);
    assert!(approx_eq(track.position(), 200.0));
}
