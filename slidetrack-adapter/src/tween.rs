/// Easing curves for tween interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// The default for snap and programmatic moves.
    #[default]
    EaseOutQuint,
    /// Used for rubberband coasting and recovery.
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOutQuint => {
                let u = t - 1.0;
                1.0 + u * u * u * u * u
            }
            Self::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
        }
    }
}

/// The state of one in-flight tween.
///
/// `start_ms` is captured lazily on the first frame, so a tween started
/// between frames begins easing from its first scheduled step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenState {
    pub distance: f64,
    pub moved: f64,
    pub duration_ms: f64,
    pub start_ms: Option<f64>,
    pub easing: Easing,
}

/// What a tween produced for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// No tween is active.
    Idle,
    /// The tween proposes a movement delta for this frame. The caller must
    /// answer with [`Animation::resolve`] before doing anything else with the
    /// engine.
    Move { delta: f64 },
    /// The tween ran out of time; `remaining` is the distance not yet applied.
    Complete { remaining: f64 },
}

/// The caller's verdict on a proposed [`Frame::Move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// The delta was applied; keep the tween running.
    Continue,
    /// Control of further movement passes to the caller (e.g. a redirect into
    /// a rubberband recovery); the tween ends now.
    Stop,
}

/// A generic, domain-agnostic tween engine.
///
/// At most one tween is active per engine; starting a new one implicitly
/// cancels the previous. The engine is poll-driven: the owner calls
/// [`Animation::step`] once per scheduled frame and answers each proposed
/// move with [`Animation::resolve`]. Every tween carries a generation token;
/// a bumped generation means the tween a caller observed earlier no longer
/// exists, which removes the stale-callback hazard of flag-based
/// cancellation.
///
/// Cancelling between `step` and `resolve` (i.e. from within the frame being
/// processed) is a programming error and asserts.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    tween: Option<TweenState>,
    generation: u64,
    in_frame: bool,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }

    /// The token of the current tween; bumped whenever a tween ends.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tween(&self) -> Option<&TweenState> {
        self.tween.as_ref()
    }

    /// Starts a tween over `distance`, cancelling any running one.
    ///
    /// Returns the new tween's generation token.
    pub fn start(&mut self, distance: f64, duration_ms: f64, easing: Easing) -> u64 {
        self.cancel();
        self.tween = Some(TweenState {
            distance,
            moved: 0.0,
            duration_ms,
            start_ms: None,
            easing,
        });
        ttrace!(distance, duration_ms, "tween start");
        self.generation
    }

    /// Advances the tween to `now_ms`.
    ///
    /// A [`Frame::Move`] opens a frame that must be closed with
    /// [`Animation::resolve`]; [`Frame::Complete`] ends the tween and bumps
    /// the generation.
    pub fn step(&mut self, now_ms: f64) -> Frame {
        assert!(!self.in_frame, "step while a frame is still unresolved");
        let Some(tween) = &mut self.tween else {
            return Frame::Idle;
        };

        let start = *tween.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        if elapsed >= tween.duration_ms {
            let remaining = tween.distance - tween.moved;
            self.tween = None;
            self.generation += 1;
            return Frame::Complete { remaining };
        }

        let eased = tween.easing.sample(elapsed / tween.duration_ms);
        let delta = tween.distance * eased - tween.moved;
        self.in_frame = true;
        Frame::Move { delta }
    }

    /// Closes the frame opened by the last [`Frame::Move`].
    pub fn resolve(&mut self, delta: f64, control: Control) {
        assert!(self.in_frame, "resolve without an open frame");
        self.in_frame = false;
        match control {
            Control::Continue => {
                if let Some(tween) = &mut self.tween {
                    tween.moved += delta;
                }
            }
            Control::Stop => {
                self.tween = None;
                self.generation += 1;
            }
        }
    }

    /// Cancels the running tween, if any.
    ///
    /// Asserts when invoked while a frame is open: a tween may not cancel
    /// itself from within its own frame. Redirects must go through
    /// [`Animation::resolve`] with [`Control::Stop`] instead.
    pub fn cancel(&mut self) {
        assert!(
            !self.in_frame,
            "cannot cancel a tween from within its own frame"
        );
        if self.tween.take().is_some() {
            self.generation += 1;
        }
    }
}
