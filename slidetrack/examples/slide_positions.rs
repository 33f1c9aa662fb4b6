// Example: per-slide placement in loop and centered configurations.
use slidetrack::{MoveKind, Track, TrackOptions};

fn print_positions(label: &str, track: &Track) {
    println!("{label}:");
    for (idx, p) in track.slide_positions().iter().enumerate() {
        println!(
            "  slide {idx}: distance={:+.3} portion={:.3} abs={:.1}px",
            p.distance,
            p.portion,
            track.geometry().get_slide_position(idx, *p)
        );
    }
}

fn main() {
    let mut looped = Track::new(
        TrackOptions::new(320.0, 6)
            .with_loop(true)
            .with_slides_per_view(2.0),
    );
    looped.move_by(480.0, MoveKind::Animated);
    print_positions("loop, 2 per view, position 480", &looped);

    let centered = Track::new(
        TrackOptions::new(320.0, 6)
            .with_centered(true)
            .with_slides_per_view(1.5)
            .with_spacing(16.0),
    );
    print_positions("centered, 1.5 per view, spacing 16", &centered);

    let rtl = Track::new(TrackOptions::new(320.0, 4).with_rtl(true));
    print_positions("rtl", &rtl);
}
