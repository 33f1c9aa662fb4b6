use slidetrack::{DragMode, TrackOptions};
use slidetrack_adapter::Controller;

fn main() {
    // Example: free-mode coasting with a rubberband bounce at the track edge.
    let mut c = Controller::new(TrackOptions::new(300.0, 6).with_drag_mode(DragMode::Free));

    // A hard fling released close to the end of the track.
    let mut now_ms = 0.0;
    c.on_drag_start(now_ms);
    c.on_first_drag();
    for _ in 0..8 {
        now_ms += 16.0;
        c.on_drag(150.0, now_ms);
    }
    c.on_drag_stop();
    println!(
        "released: position={} speed={:.2} track_length={}",
        c.track().position(),
        c.track().speed(),
        c.track().geometry().track_length()
    );

    let mut peak = c.track().position();
    while c.is_animating() {
        now_ms += 16.0;
        if let Some(position) = c.tick(now_ms) {
            peak = peak.max(position);
        }
    }

    println!(
        "settled: position={} idx={} (peak overshoot {:.1}px)",
        c.track().position(),
        c.track().current_idx(),
        peak - c.track().geometry().track_length()
    );
}
