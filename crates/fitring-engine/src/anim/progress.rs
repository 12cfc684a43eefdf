use std::time::{Duration, Instant};

/// Upper bound of the progress scale.
pub const MAX_PROGRESS: f32 = 100.0;

/// Exponent of the ease-out curve. Values below 1 grow fast early and
/// approach the target gently.
pub const EASE_EXPONENT: f32 = 0.8;

/// Maps a linear time fraction to an eased one.
///
/// Negative fractions (clock skew) are treated as 0. The result is not
/// clamped above; callers cap the eased value at their target.
#[inline]
pub fn ease_out(fraction: f32) -> f32 {
    fraction.max(0.0).powf(EASE_EXPONENT)
}

/// Where an animator is in its timeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimationPhase {
    /// Created, not yet advanced. The timeline starts on the first advance.
    Idle,
    Running,
    /// Terminal. The displayed value equals the target.
    Done,
}

/// Ease-out timeline from 0 to a target value.
///
/// The animator owns no clock: the host passes a timestamp to every
/// [`advance`](Self::advance), which makes the curve reproducible in tests.
///
/// Invariants:
/// - `target` is in `[0, MAX_PROGRESS]`
/// - `displayed` is in `[0, target]` and never decreases
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    target: f32,
    duration: Duration,
    start: Option<Instant>,
    displayed: f32,
    phase: AnimationPhase,
}

impl ProgressAnimator {
    /// Creates an idle animator heading for `target` over `duration`.
    ///
    /// `target` is clamped to `[0, MAX_PROGRESS]`; NaN becomes 0.
    pub fn new(target: f32, duration: Duration) -> Self {
        Self {
            target: sanitize_target(target),
            duration,
            start: None,
            displayed: 0.0,
            phase: AnimationPhase::Idle,
        }
    }

    /// Creates an animator that is already settled at `target`.
    pub fn settled(target: f32) -> Self {
        let target = sanitize_target(target);
        Self {
            target,
            duration: Duration::ZERO,
            start: None,
            displayed: target,
            phase: AnimationPhase::Done,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current displayed value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.displayed
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == AnimationPhase::Done
    }

    /// Timestamp of the first advance, if any.
    #[inline]
    pub fn started_at(&self) -> Option<Instant> {
        self.start
    }

    /// Advances the timeline to `now` and returns the displayed value.
    ///
    /// The first call fixes the start of the timeline. Once the full duration
    /// has elapsed the value snaps to exactly `target` and the animator is done;
    /// further calls return that value unchanged.
    pub fn advance(&mut self, now: Instant) -> f32 {
        if self.phase == AnimationPhase::Done {
            return self.displayed;
        }

        let start = *self.start.get_or_insert(now);
        self.phase = AnimationPhase::Running;

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.duration {
            self.displayed = self.target;
            self.phase = AnimationPhase::Done;
            return self.displayed;
        }

        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = (ease_out(fraction) * self.target).min(self.target);

        // A timestamp older than the previous one must not pull the ring back.
        self.displayed = self.displayed.max(eased);
        self.displayed
    }
}

fn sanitize_target(target: f32) -> f32 {
    if target.is_nan() {
        0.0
    } else {
        target.clamp(0.0, MAX_PROGRESS)
    }
}
