// Example: minimal track usage and index math.
use slidetrack::{MoveKind, Track, TrackOptions};

fn main() {
    let mut track = Track::new(TrackOptions::new(300.0, 8));
    println!(
        "track_length={} size_per_slide={}",
        track.geometry().track_length(),
        track.geometry().size_per_slide()
    );

    track.move_by(450.0, MoveKind::Animated);
    println!(
        "after move: position={} idx={} progress={:.3}",
        track.position(),
        track.current_idx(),
        track.progress()
    );

    // Distance needed to rest on slide 5 from wherever we are now.
    println!("distance_to(5)={}", track.calculate_index_distance(5));

    let details = track.details();
    println!(
        "details: abs={} rel={} progress_slides={:.3}",
        details.absolute_slide, details.relative_slide, details.progress_slides
    );
}
