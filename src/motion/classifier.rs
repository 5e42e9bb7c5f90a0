//! Motion classification with frame-count hysteresis.

use glam::Vec3;

use crate::error::{check_timestep, JiggleError};
use crate::options::MotionOptions;

/// Result of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Instantaneous velocity, zeroed whenever the point is classified as
    /// still.
    pub velocity: Vec3,
    /// Whether the tracked point is in motion.
    pub in_motion: bool,
}

/// Derives velocity of the tracked point and a debounced in-motion flag.
///
/// The previous position is not advanced by [`classify`](Self::classify);
/// the owner calls [`commit`](Self::commit) once the frame's pose has been
/// derived.
#[derive(Debug, Clone)]
pub struct MotionClassifier {
    threshold: f32,
    debounce_frames: u32,
    release_forces_stillness: bool,
    previous_position: Vec3,
    in_motion: bool,
    static_frames: u32,
}

impl MotionClassifier {
    /// Create a classifier at rest at `position`.
    pub fn new(options: &MotionOptions, position: Vec3) -> Self {
        Self {
            threshold: options.threshold,
            debounce_frames: options.debounce_frames,
            release_forces_stillness: options.release_forces_stillness,
            previous_position: position,
            in_motion: false,
            static_frames: 0,
        }
    }

    /// Classify the frame ending at `position`, `dt` seconds after the last
    /// committed position.
    ///
    /// Stillness is declared once the speed stays under the threshold for
    /// more than the debounce window, or on any frame without a grab when
    /// `release_forces_stillness` is set. A speed above the threshold or an
    /// active grab then declares motion and restarts the debounce window, so
    /// ungrabbed motion is live exactly while the speed exceeds the
    /// threshold.
    pub fn classify(
        &mut self,
        position: Vec3,
        dt: f32,
        manipulated: bool,
    ) -> Result<Classification, JiggleError> {
        check_timestep(dt)?;

        let raw = (position - self.previous_position) / dt;
        let speed = raw.length();
        self.static_frames = self.static_frames.saturating_add(1);

        let debounced =
            speed < self.threshold && self.static_frames > self.debounce_frames;
        if debounced || (!manipulated && self.release_forces_stillness) {
            self.in_motion = false;
        }
        if speed > self.threshold || manipulated {
            self.in_motion = true;
            self.static_frames = 0;
        }

        Ok(Classification {
            velocity: if self.in_motion { raw } else { Vec3::ZERO },
            in_motion: self.in_motion,
        })
    }

    /// Record the position the next frame's velocity is measured from.
    pub fn commit(&mut self, position: Vec3) {
        self.previous_position = position;
    }

    /// Current in-motion flag.
    pub fn in_motion(&self) -> bool {
        self.in_motion
    }

    /// Frames since motion was last declared.
    pub fn static_frames(&self) -> u32 {
        self.static_frames
    }

    /// Last committed position.
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn classifier(release_forces_stillness: bool) -> MotionClassifier {
        let options = MotionOptions {
            release_forces_stillness,
            ..MotionOptions::default()
        };
        MotionClassifier::new(&options, Vec3::ZERO)
    }

    /// Classify and commit, the way the bone drives it.
    fn feed(
        c: &mut MotionClassifier,
        pos: Vec3,
        manipulated: bool,
    ) -> Classification {
        let result = c.classify(pos, DT, manipulated).unwrap();
        c.commit(pos);
        result
    }

    #[test]
    fn stationary_point_is_still() {
        let mut c = classifier(true);
        let result = feed(&mut c, Vec3::ZERO, false);
        assert!(!result.in_motion);
        assert_eq!(result.velocity, Vec3::ZERO);
    }

    #[test]
    fn fast_point_is_moving_with_velocity() {
        let mut c = classifier(true);
        let result = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
        assert!(result.in_motion);
        assert!((result.velocity - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-3);
        assert_eq!(c.static_frames(), 0);
    }

    #[test]
    fn ungrabbed_motion_stops_as_soon_as_speed_drops() {
        let mut c = classifier(true);
        let _ = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
        let result = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
        assert!(!result.in_motion);
    }

    #[test]
    fn debounce_holds_motion_without_release_term() {
        let mut c = classifier(false);
        let _ = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);

        // Still for exactly the debounce window: motion is held
        for _ in 0..15 {
            let result = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
            assert!(result.in_motion);
            assert_eq!(result.velocity, Vec3::ZERO);
        }
        // One more still frame crosses the window
        let result = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
        assert!(!result.in_motion);
    }

    #[test]
    fn grab_always_counts_as_motion() {
        let mut c = classifier(true);
        for _ in 0..30 {
            let result = feed(&mut c, Vec3::ZERO, true);
            assert!(result.in_motion);
        }
        assert_eq!(c.static_frames(), 0);
    }

    #[test]
    fn invalid_dt_leaves_state_untouched() {
        let mut c = classifier(true);
        let _ = feed(&mut c, Vec3::new(0.1, 0.0, 0.0), false);
        let frames = c.static_frames();

        let err = c.classify(Vec3::ONE, 0.0, false).unwrap_err();
        assert!(matches!(err, JiggleError::InvalidTimestep { .. }));
        assert!(c.classify(Vec3::ONE, -DT, false).is_err());

        assert!(c.in_motion());
        assert_eq!(c.static_frames(), frames);
        assert_eq!(c.previous_position(), Vec3::new(0.1, 0.0, 0.0));
    }
}
