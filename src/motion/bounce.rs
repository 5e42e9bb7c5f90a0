//! Geometrically decaying overshoot targets.

use glam::Vec3;

use crate::options::BounceOptions;

/// Per-frame inputs of [`BounceOscillator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceInput {
    /// Whether a grab is active. Nothing advances while grabbed.
    pub manipulated: bool,
    /// Classifier output for this frame.
    pub in_motion: bool,
    /// Whether the travel tracker has closed the current segment.
    pub travel_end_captured: bool,
    /// Rest-pose target derived from the anchor this frame.
    pub live_target: Vec3,
    /// Blended target that currently drives the tip.
    pub dynamic_target: Vec3,
}

/// Sequence of bounce targets alternating around the live target with
/// amplitude divided by the decay factor at every step.
///
/// The amplitude is never clamped to zero; it approaches the live target
/// asymptotically and stops advancing once it falls under the stabilization
/// epsilon.
#[derive(Debug, Clone)]
pub struct BounceOscillator {
    decay_factor: f32,
    epsilon: f32,
    target: Vec3,
    net_travel: Vec3,
    step: u32,
}

impl BounceOscillator {
    /// Create an oscillator at rest on `target`.
    pub fn new(options: &BounceOptions, target: Vec3) -> Self {
        Self {
            decay_factor: options.decay_factor,
            epsilon: options.stabilization_epsilon,
            target,
            net_travel: Vec3::ZERO,
            step: 0,
        }
    }

    /// Start a new decay sequence; the next first bounce may fire.
    pub fn reset_steps(&mut self) {
        self.step = 0;
    }

    /// Set the net travel that seeds the first bounce.
    pub fn seed(&mut self, net_travel: Vec3) {
        self.net_travel = net_travel;
    }

    /// Pin the target to a grab position.
    pub fn hold(&mut self, position: Vec3) {
        self.target = position;
    }

    /// Apply at most one decay step and return the current bounce target.
    ///
    /// The first bounce fires once the point is still and its travel
    /// segment is closed. Later bounces wait for the dynamic target to
    /// catch up with the current one.
    pub fn advance(&mut self, input: &BounceInput) -> Vec3 {
        if input.manipulated {
            return self.target;
        }

        let live = input.live_target;
        if !input.in_motion && self.step == 0 && input.travel_end_captured {
            self.target = live + self.net_travel / self.decay_factor;
            self.step += 1;
            log::debug!(
                "bounce: first target {} (amplitude {:.4})",
                self.target,
                self.amplitude(live)
            );
        } else if self.step > 0
            && self.target.distance(live) > self.epsilon
            && input.dynamic_target.distance(self.target) < self.epsilon
        {
            self.net_travel = live - self.target;
            self.target = live + self.net_travel / self.decay_factor;
            self.step += 1;
            log::debug!(
                "bounce: step {} target {} (amplitude {:.4})",
                self.step,
                self.target,
                self.amplitude(live)
            );
        }

        self.target
    }

    /// Distance of the current bounce target from `live_target`.
    pub fn amplitude(&self, live_target: Vec3) -> f32 {
        self.target.distance(live_target)
    }

    /// Current bounce target.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Net travel of the last decay step.
    pub fn net_travel(&self) -> Vec3 {
        self.net_travel
    }

    /// Decay steps applied in the current sequence.
    pub fn step(&self) -> u32 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oscillator(decay_factor: f32) -> BounceOscillator {
        let options = BounceOptions {
            decay_factor,
            stabilization_epsilon: 0.01,
        };
        BounceOscillator::new(&options, Vec3::ZERO)
    }

    fn settling(dynamic_target: Vec3) -> BounceInput {
        BounceInput {
            manipulated: false,
            in_motion: false,
            travel_end_captured: true,
            live_target: Vec3::ZERO,
            dynamic_target,
        }
    }

    #[test]
    fn amplitude_halves_every_step() {
        let mut osc = oscillator(2.0);
        let m = 1.0;
        osc.seed(Vec3::new(m, 0.0, 0.0));

        let mut dynamic = Vec3::ZERO;
        let mut previous = f32::INFINITY;
        for n in 1..=6 {
            let target = osc.advance(&settling(dynamic));
            let amplitude = target.length();
            let expected = m / 2f32.powi(n);
            assert!(
                (amplitude - expected).abs() < 1e-6,
                "step {n}: {amplitude} vs {expected}"
            );
            assert!(amplitude < previous);
            previous = amplitude;
            assert_eq!(osc.step(), n as u32);
            // Dynamic target catches up before the next step
            dynamic = target;
        }
    }

    #[test]
    fn bounces_alternate_sides() {
        let mut osc = oscillator(2.0);
        osc.seed(Vec3::X);
        let first = osc.advance(&settling(Vec3::ZERO));
        let second = osc.advance(&settling(first));
        assert!(first.x > 0.0);
        assert!(second.x < 0.0);
    }

    #[test]
    fn waits_for_dynamic_target_to_catch_up() {
        let mut osc = oscillator(2.0);
        osc.seed(Vec3::X);
        let first = osc.advance(&settling(Vec3::ZERO));
        // Dynamic target still far away: hold the current bounce
        assert_eq!(osc.advance(&settling(Vec3::new(0.2, 0.0, 0.0))), first);
        assert_eq!(osc.step(), 1);
    }

    #[test]
    fn stops_once_stabilized() {
        let mut osc = oscillator(2.0);
        osc.seed(Vec3::X);
        let mut dynamic = Vec3::ZERO;
        for _ in 0..64 {
            dynamic = osc.advance(&settling(dynamic));
        }
        let steps = osc.step();
        assert!(osc.amplitude(Vec3::ZERO) <= 0.01);
        assert!(osc.amplitude(Vec3::ZERO) > 0.0);
        let _ = osc.advance(&settling(dynamic));
        assert_eq!(osc.step(), steps);
    }

    #[test]
    fn zero_travel_is_zero_amplitude() {
        let mut osc = oscillator(2.0);
        osc.seed(Vec3::ZERO);
        assert_eq!(osc.advance(&settling(Vec3::ZERO)), Vec3::ZERO);
        assert_eq!(osc.step(), 1);
    }

    #[test]
    fn nothing_fires_without_closed_segment() {
        let mut osc = oscillator(2.0);
        osc.hold(Vec3::Y);
        let input = BounceInput {
            travel_end_captured: false,
            ..settling(Vec3::Y)
        };
        assert_eq!(osc.advance(&input), Vec3::Y);
        assert_eq!(osc.step(), 0);
    }

    #[test]
    fn grab_freezes_sequence() {
        let mut osc = oscillator(2.0);
        osc.seed(Vec3::X);
        let input = BounceInput {
            manipulated: true,
            ..settling(Vec3::ZERO)
        };
        assert_eq!(osc.advance(&input), Vec3::ZERO);
        assert_eq!(osc.step(), 0);
    }
}
