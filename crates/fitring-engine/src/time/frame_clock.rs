use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots at a target rate.
///
/// Delta time is clamped so a stalled terminal or a debugger pause does not
/// show up as a pathological frame. The animation timeline itself reads
/// `now`, not `dt`, so clamping never distorts the easing curve.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    frame_budget: Duration,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock targeting `fps` frames per second (minimum 1).
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            last: Instant::now(),
            frame_index: 0,
            frame_budget: Duration::from_secs(1) / fps,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Time allotted to one frame.
    #[inline]
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to an explicit timestamp.
    ///
    /// Timestamps earlier than the previous tick yield the minimum delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time left in the current frame's budget, measured from the last tick.
    pub fn remaining_budget(&self) -> Duration {
        self.frame_budget
            .saturating_sub(Instant::now().saturating_duration_since(self.last))
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_matches_fps() {
        assert_eq!(FrameClock::new(50).frame_budget(), Duration::from_millis(20));
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        assert_eq!(FrameClock::new(0).frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        assert_eq!(clock.tick_at(t0).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_after_stall() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn backwards_timestamp_yields_min_dt() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now() + Duration::from_millis(100);
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 - Duration::from_millis(50));
        assert!((ft.dt - 0.0001).abs() < 1e-6);
    }
}
