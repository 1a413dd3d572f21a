/// Fixed-rate frame pacing
use std::time::Instant;

/// Monotonic millisecond counter
pub trait TickSource {
    fn now_ms(&mut self) -> u64;
}

/// Wall-clock tick source measured from its own creation
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    fn now_ms(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Snapshot handed to the frame that a tick starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Accumulated rotation angle in radians, already advanced by `dt`
    pub angle: f32,
    /// Tick timestamp in milliseconds
    pub now_ms: u64,
}

/// Clock state: last tick and accumulated angle.
///
/// The pacer is idle until at least `interval_ms` has passed since the last
/// tick; [`FramePacer::try_tick`] is the Idle to Rendering transition.
#[derive(Debug, Clone)]
pub struct FramePacer {
    last_tick_ms: u64,
    interval_ms: u64,
    angle: f32,
    angular_speed: f32,
}

impl FramePacer {
    /// Starts with `last_tick_ms = 0` so the first tick covers startup time.
    pub fn new(interval_ms: u64, angular_speed: f32) -> Self {
        Self {
            last_tick_ms: 0,
            interval_ms,
            angle: 0.0,
            angular_speed,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Whether a tick is due at `now_ms`
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_tick_ms) >= self.interval_ms
    }

    /// Advance the clock state if a tick is due.
    pub fn try_tick(&mut self, now_ms: u64) -> Option<FrameTime> {
        if !self.is_due(now_ms) {
            return None;
        }

        let dt = now_ms.saturating_sub(self.last_tick_ms) as f32 / 1000.0;
        self.last_tick_ms = now_ms;
        self.angle += self.angular_speed * dt;

        Some(FrameTime {
            dt,
            angle: self.angle,
            now_ms,
        })
    }

    /// Spin on `clock` until the next tick is due, then take it.
    pub fn wait<C: TickSource + ?Sized>(&mut self, clock: &mut C) -> FrameTime {
        loop {
            if let Some(time) = self.try_tick(clock.now_ms()) {
                return time;
            }
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock that advances a fixed step on every read
    struct SteppingClock {
        now: u64,
        step: u64,
    }

    impl TickSource for SteppingClock {
        fn now_ms(&mut self) -> u64 {
            self.now += self.step;
            self.now
        }
    }

    #[test]
    fn test_not_due_before_interval() {
        let mut pacer = FramePacer::new(33, 1.0);
        assert!(pacer.try_tick(32).is_none());
        assert_eq!(pacer.angle(), 0.0);
        assert_eq!(pacer.last_tick_ms(), 0);
    }

    #[test]
    fn test_tick_every_33ms_step() {
        let mut pacer = FramePacer::new(1000 / 30, 1.0);
        for step in 1..=10u64 {
            let time = pacer.try_tick(step * 33).expect("tick due");
            assert!((time.dt - 0.033).abs() < 1e-6);
            assert_eq!(time.now_ms, step * 33);
        }
        assert!((pacer.angle() - 0.33).abs() < 1e-5);
    }

    #[test]
    fn test_late_tick_reports_full_delta() {
        let mut pacer = FramePacer::new(33, 2.0);
        let time = pacer.try_tick(100).unwrap();
        assert!((time.dt - 0.1).abs() < 1e-6);
        assert!((time.angle - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_angle_is_monotonic() {
        let mut pacer = FramePacer::new(33, 1.0);
        let mut clock = SteppingClock { now: 0, step: 7 };
        let mut last = pacer.angle();
        for _ in 0..20 {
            let time = pacer.wait(&mut clock);
            assert!(time.angle > last);
            assert!(time.dt >= 0.033);
            last = time.angle;
        }
    }

    #[test]
    fn test_wait_spins_until_due() {
        let mut pacer = FramePacer::new(33, 1.0);
        let mut clock = SteppingClock { now: 0, step: 10 };
        let time = pacer.wait(&mut clock);
        // 10, 20, 30 are too early; 40 is the first reading past 33
        assert_eq!(time.now_ms, 40);
        assert!((time.dt - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
