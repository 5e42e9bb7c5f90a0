//! Travel segment tracking with reversal correction.

use glam::Vec3;

use crate::options::MotionOptions;

/// What the tracked point did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSample {
    /// Tracked position this frame.
    pub position: Vec3,
    /// Classifier output for this frame.
    pub in_motion: bool,
    /// Whether a grab is active.
    pub manipulated: bool,
    /// Monotonic simulated time, used to throttle reversal checks.
    pub sim_time: f64,
}

/// Segment transitions reported to the owner of the bounce state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TravelEvent {
    /// Motion began and a new segment was opened at the current position.
    Started,
    /// Motion stopped; `net` is end minus start of the finished segment.
    Ended {
        /// Net travel vector seeding the first bounce.
        net: Vec3,
    },
    /// A grab was released and a fresh segment opened at the release
    /// point.
    Released,
}

/// Records where continuous motion began and ended.
///
/// While a segment is open, a throttled check watches for the point heading
/// back toward the start and re-anchors the start there, so back-and-forth
/// tremor does not inflate the recorded travel.
#[derive(Debug, Clone)]
pub struct TravelTracker {
    threshold: f32,
    check_interval: f64,
    start: Vec3,
    end: Vec3,
    start_captured: bool,
    end_captured: bool,
    net_travel: Vec3,
    was_manipulated: bool,
    next_check_time: f64,
    last_check_position: Vec3,
    last_start_distance: f32,
}

impl TravelTracker {
    /// Create a tracker with no open segment, resting at `position`.
    pub fn new(options: &MotionOptions, position: Vec3) -> Self {
        Self {
            threshold: options.threshold,
            check_interval: f64::from(options.reversal_check_interval),
            start: position,
            end: position,
            start_captured: false,
            end_captured: false,
            net_travel: Vec3::ZERO,
            was_manipulated: false,
            next_check_time: 0.0,
            last_check_position: position,
            last_start_distance: 0.0,
        }
    }

    /// Advance the tracker by one frame.
    ///
    /// `bounce_target` is the current bounce target; on the frame a grab is
    /// released it becomes the origin of the fresh segment. The segment end
    /// is then captured on the next frame, so the release frame itself
    /// keeps the grab point as its bounce target.
    pub fn update(
        &mut self,
        sample: &TravelSample,
        bounce_target: Vec3,
    ) -> Option<TravelEvent> {
        if sample.manipulated {
            self.was_manipulated = true;
            return None;
        }

        if self.was_manipulated {
            self.was_manipulated = false;
            self.open_segment(bounce_target, sample.sim_time);
            log::debug!("travel: release reseeds origin at {bounce_target}");
            return Some(TravelEvent::Released);
        }

        if self.start_captured {
            self.check_reversal(sample.position, sample.sim_time);
        }

        if sample.in_motion && !self.start_captured {
            self.open_segment(sample.position, sample.sim_time);
            log::debug!("travel: started at {}", sample.position);
            return Some(TravelEvent::Started);
        }

        if !sample.in_motion && !self.end_captured && self.start_captured {
            self.end = sample.position;
            self.end_captured = true;
            self.start_captured = false;
            self.net_travel = self.end - self.start;
            log::debug!(
                "travel: ended at {}, net {} ({:.3})",
                self.end,
                self.net_travel,
                self.net_travel.length()
            );
            return Some(TravelEvent::Ended {
                net: self.net_travel,
            });
        }

        None
    }

    fn open_segment(&mut self, origin: Vec3, sim_time: f64) {
        self.start = origin;
        self.start_captured = true;
        self.end_captured = false;
        self.next_check_time = sim_time + self.check_interval;
        self.last_check_position = origin;
        self.last_start_distance = 0.0;
    }

    fn check_reversal(&mut self, position: Vec3, sim_time: f64) {
        if sim_time < self.next_check_time {
            return;
        }
        self.next_check_time = sim_time + self.check_interval;

        let distance = position.distance(self.start);
        let approach = self.last_start_distance - distance;
        let displacement = position.distance(self.last_check_position);
        if approach > self.threshold && displacement > self.threshold {
            log::debug!(
                "travel: reversal at {position}, start moved from {}",
                self.start
            );
            self.start = position;
        }

        self.last_start_distance = position.distance(self.start);
        self.last_check_position = position;
    }

    /// Origin of the current (or last) segment.
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// End of the last finished segment.
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Whether a segment is open.
    pub fn start_captured(&self) -> bool {
        self.start_captured
    }

    /// Whether the last segment has been closed.
    pub fn end_captured(&self) -> bool {
        self.end_captured
    }

    /// End minus start of the last finished segment.
    pub fn net_travel(&self) -> Vec3 {
        self.net_travel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Coarser than the reversal interval, so every frame is checked.
    const FRAME_TIME: f64 = 0.1;

    struct Driver {
        tracker: TravelTracker,
        frame: u32,
    }

    impl Driver {
        fn new() -> Self {
            Self {
                tracker: TravelTracker::new(
                    &MotionOptions::default(),
                    Vec3::ZERO,
                ),
                frame: 0,
            }
        }

        fn feed(&mut self, x: f32, in_motion: bool) -> Option<TravelEvent> {
            self.frame += 1;
            self.tracker.update(
                &TravelSample {
                    position: Vec3::new(x, 0.0, 0.0),
                    in_motion,
                    manipulated: false,
                    sim_time: f64::from(self.frame) * FRAME_TIME,
                },
                Vec3::ZERO,
            )
        }
    }

    #[test]
    fn captures_start_then_end() {
        let mut d = Driver::new();
        assert_eq!(d.feed(0.0, true), Some(TravelEvent::Started));
        assert!(d.tracker.start_captured());
        assert_eq!(d.feed(0.5, true), None);
        assert_eq!(
            d.feed(1.0, false),
            Some(TravelEvent::Ended {
                net: Vec3::new(1.0, 0.0, 0.0)
            })
        );
        assert!(d.tracker.end_captured());
        assert!(!d.tracker.start_captured());

        // Staying still does not re-close the segment
        assert_eq!(d.feed(1.0, false), None);
    }

    #[test]
    fn reversal_moves_start_to_near_apex() {
        let mut d = Driver::new();
        assert_eq!(d.feed(0.0, true), Some(TravelEvent::Started));
        for i in 1..=10 {
            let _ = d.feed(i as f32 * 0.1, true);
        }
        // Head back past the midpoint
        for i in 1..=6 {
            let _ = d.feed(1.0 - i as f32 * 0.1, true);
        }

        // First frame back from the apex re-anchors the start there
        let start = d.tracker.start();
        assert!((start.x - 0.9).abs() < 1e-5, "got {start}");

        let Some(TravelEvent::Ended { net }) = d.feed(0.4, false) else {
            panic!("expected segment end");
        };
        assert!(net.x < 0.0);
        assert!((net.length() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn steady_motion_keeps_origin() {
        let mut d = Driver::new();
        let _ = d.feed(0.0, true);
        for i in 1..=20 {
            let _ = d.feed(i as f32 * 0.05, true);
        }
        assert_eq!(d.tracker.start(), Vec3::ZERO);
    }

    #[test]
    fn reversal_checks_are_throttled() {
        let mut tracker =
            TravelTracker::new(&MotionOptions::default(), Vec3::ZERO);
        let sample = |x: f32, sim_time: f64| TravelSample {
            position: Vec3::new(x, 0.0, 0.0),
            in_motion: true,
            manipulated: false,
            sim_time,
        };
        let _ = tracker.update(&sample(0.0, 0.0), Vec3::ZERO);
        let _ = tracker.update(&sample(1.0, 0.06), Vec3::ZERO);
        // Back toward the start, but inside the throttle window
        let _ = tracker.update(&sample(0.5, 0.07), Vec3::ZERO);
        assert_eq!(tracker.start(), Vec3::ZERO);
        // Next allowed check sees the approach
        let _ = tracker.update(&sample(0.4, 0.12), Vec3::ZERO);
        assert_eq!(tracker.start(), Vec3::new(0.4, 0.0, 0.0));
    }

    #[test]
    fn reversal_still_detected_after_days_of_uptime() {
        let mut tracker =
            TravelTracker::new(&MotionOptions::default(), Vec3::ZERO);
        let base = 600_000.0;
        let mut feed = |frame: u32, x: f32| {
            let _ = tracker.update(
                &TravelSample {
                    position: Vec3::new(x, 0.0, 0.0),
                    in_motion: true,
                    manipulated: false,
                    sim_time: base + f64::from(frame) / 60.0,
                },
                Vec3::ZERO,
            );
        };
        let mut frame = 0;
        for i in 0..=10 {
            feed(frame, i as f32 * 0.1);
            frame += 1;
        }
        for i in 1..=6 {
            feed(frame, 1.0 - i as f32 * 0.1);
            frame += 1;
        }
        let start = tracker.start();
        assert!(start.x > 0.3, "start stuck at {start}");
    }

    #[test]
    fn release_reseeds_from_bounce_target() {
        let mut tracker =
            TravelTracker::new(&MotionOptions::default(), Vec3::ZERO);
        let grab = Vec3::new(0.0, 1.0, 0.0);
        let grabbed = TravelSample {
            position: Vec3::ZERO,
            in_motion: true,
            manipulated: true,
            sim_time: 0.1,
        };
        assert_eq!(tracker.update(&grabbed, grab), None);

        let released = TravelSample {
            manipulated: false,
            in_motion: false,
            ..grabbed
        };
        assert_eq!(
            tracker.update(&released, grab),
            Some(TravelEvent::Released)
        );
        assert_eq!(tracker.start(), grab);
        assert!(tracker.start_captured());
        assert!(!tracker.end_captured());

        // End is captured on the following settling frame
        assert_eq!(
            tracker.update(&released, grab),
            Some(TravelEvent::Ended { net: -grab })
        );
    }
}
