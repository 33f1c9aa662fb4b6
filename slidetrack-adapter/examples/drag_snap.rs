use slidetrack::TrackOptions;
use slidetrack_adapter::Controller;

fn main() {
    // Example: a headless controller driving a snap carousel without holding
    // any UI objects.
    //
    // An adapter would:
    // - forward normalized pointer deltas into on_drag_* as events arrive
    // - call tick(now_ms) in a frame loop / timer while motion is live
    // - apply the returned position to the real slide container (if any)
    let mut c = Controller::new(TrackOptions::new(300.0, 8));

    // A quick forward swipe: 5 frames of 40px.
    let mut now_ms = 0.0;
    c.on_drag_start(now_ms);
    c.on_first_drag();
    for _ in 0..5 {
        now_ms += 16.0;
        c.on_drag(40.0, now_ms);
    }
    c.on_drag_stop();
    println!(
        "released at position={} idx={} speed={:.2}",
        c.track().position(),
        c.track().current_idx(),
        c.track().speed()
    );

    while c.is_animating() {
        now_ms += 16.0;
        if let Some(position) = c.tick(now_ms) {
            if (now_ms as u64).is_multiple_of(80) {
                println!("t={now_ms} position={position:.1}");
            }
        }
    }

    println!(
        "done: position={} idx={}",
        c.track().position(),
        c.track().current_idx()
    );
}
