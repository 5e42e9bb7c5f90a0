//! Frame clock producing per-frame deltas and monotonic simulated time.

use web_time::Instant;

/// Elapsed time handed to the simulation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Monotonic simulated time in seconds, including this frame.
    pub sim_time: f64,
}

/// Frame clock producing per-frame deltas and a monotonic simulated time
pub struct FrameClock {
    /// Fixed step in seconds, or `None` to measure wall-clock time
    fixed_step: Option<f32>,
    /// Last tick timestamp
    last_frame: Instant,
    /// Accumulated simulated time, kept wide so long sessions keep ticking
    sim_time: f64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock that measures wall-clock time between ticks.
    pub fn new() -> Self {
        Self {
            fixed_step: None,
            last_frame: Instant::now(),
            sim_time: 0.0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Create a deterministic clock advancing by `step` seconds per tick.
    pub fn fixed(step: f32) -> Self {
        Self {
            fixed_step: Some(step),
            smoothed_fps: if step > 0.0 { 1.0 / step } else { 0.0 },
            ..Self::new()
        }
    }

    /// Advance the clock by one frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = match self.fixed_step {
            Some(step) => step,
            None => now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.last_frame = now;

        if dt > 0.0 {
            self.sim_time += f64::from(dt);
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime {
            dt,
            sim_time: self.sim_time,
        }
    }

    /// Simulated time accumulated so far.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_accumulates_sim_time() {
        let mut clock = FrameClock::fixed(0.5);
        assert_eq!(clock.tick(), FrameTime { dt: 0.5, sim_time: 0.5 });
        assert_eq!(clock.tick(), FrameTime { dt: 0.5, sim_time: 1.0 });
        assert_eq!(clock.sim_time(), 1.0);
        assert!((clock.fps() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sim_time_keeps_advancing_after_days() {
        let mut clock = FrameClock::fixed(1.0 / 60.0);
        // Past 2^19 s a 1/60 s step no longer registers in f32
        clock.sim_time = 530_000.0;
        for _ in 0..600 {
            let _ = clock.tick();
        }
        let advanced = clock.sim_time() - 530_000.0;
        assert!((advanced - 10.0).abs() < 1e-3, "advanced {advanced}");
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a.dt >= 0.0);
        assert!(b.sim_time >= a.sim_time);
    }
}
