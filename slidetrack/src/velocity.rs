use crate::Direction;

const MAX_SAMPLES: usize = 6;
const IDLE_TIMEOUT_MS: f64 = 50.0;
const MAX_SPEED: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    delta: f64,
    timestamp_ms: f64,
}

/// Estimates drag speed and direction from a bounded window of recent samples.
///
/// All time flows through the `now_ms` arguments, so the estimator is fully
/// deterministic: there is no OS timer. The 50ms idle window is re-armed by
/// every sample (never additive); callers drive it by invoking [`poll`] from
/// their frame loop, and a `measure` after a long gap discards the stale
/// history before incorporating the new sample.
///
/// [`poll`]: VelocityTracker::poll
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: Vec<Sample>,
    direction: Direction,
    speed: f64,
    last_sample_ms: Option<f64>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speed in pixels per millisecond, clamped to `[-10, 10]`.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Incorporates one drag delta observed at `now_ms`.
    ///
    /// A direction reversal discards the sample history. Only the last six
    /// samples are kept.
    pub fn measure(&mut self, delta: f64, now_ms: f64) {
        if self.idle_expired(now_ms) {
            self.samples.clear();
            self.speed = 0.0;
        }

        let direction = Direction::from_sign(delta);
        if direction != self.direction {
            self.samples.clear();
            self.direction = direction;
        }

        self.samples.push(Sample {
            delta,
            timestamp_ms: now_ms,
        });
        if self.samples.len() > MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.last_sample_ms = Some(now_ms);

        self.speed = if self.samples.len() <= 1 || self.direction == Direction::Still {
            0.0
        } else {
            self.determine_speed()
        };
        ttrace!(delta, now_ms, speed = self.speed, "velocity measure");
    }

    /// Zeroes the estimate if no sample arrived within the idle window.
    ///
    /// Models "the user stopped moving": call this once per frame while a
    /// gesture may be in progress. The direction of the last movement is
    /// retained until the next sample.
    pub fn poll(&mut self, now_ms: f64) {
        if self.idle_expired(now_ms) {
            self.samples.clear();
            self.speed = 0.0;
            self.last_sample_ms = None;
        }
    }

    /// Clears the estimator at a gesture-phase transition (e.g. first drag).
    ///
    /// Unlike the idle decay, this also resets speed and direction so stale
    /// momentum can never leak into the next gesture phase.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.direction = Direction::Still;
        self.speed = 0.0;
        self.last_sample_ms = None;
    }

    fn idle_expired(&self, now_ms: f64) -> bool {
        self.last_sample_ms
            .is_some_and(|last| now_ms - last >= IDLE_TIMEOUT_MS)
    }

    fn determine_speed(&self) -> f64 {
        // All samples except the newest contribute distance; the window's
        // first/last timestamps bound the elapsed time.
        let distance: f64 = self.samples[..self.samples.len() - 1]
            .iter()
            .map(|s| s.delta)
            .sum();
        let start = self.samples[0].timestamp_ms;
        let end = self.samples[self.samples.len() - 1].timestamp_ms;
        (distance / (end - start)).max(-MAX_SPEED).min(MAX_SPEED)
    }
}
