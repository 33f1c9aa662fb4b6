// Example: observing index and progress changes through the event callback.
use slidetrack::{MoveKind, Track, TrackEvent, TrackOptions};

fn main() {
    let options = TrackOptions::new(200.0, 5).with_on_event(Some(
        |_track: &Track, event: &TrackEvent| match event {
            TrackEvent::IndexChanged { index, kind } => {
                println!("index -> {index} ({kind:?})");
            }
            TrackEvent::Moved { progress, kind } => {
                println!("moved: progress={progress:.3} ({kind:?})");
            }
        },
    ));

    let mut track = Track::new(options);

    // A handful of drag-sized steps; index events fire as slide centers are
    // crossed, a move event fires for every applied delta.
    for _ in 0..6 {
        track.move_by(70.0, MoveKind::Drag);
    }
}
