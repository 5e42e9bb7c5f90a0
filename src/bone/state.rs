//! Persistent per-instance simulation state.

use glam::Vec3;

use super::input::{AnchorPose, FrameInput, Manipulation};
use crate::error::JiggleError;
use crate::motion::{
    BlendGoal, BounceInput, BounceOscillator, MotionClassifier, PoseDriver,
    RestFrame, SimulationMode, TargetBlender, TipPose, TravelEvent,
    TravelSample, TravelTracker,
};
use crate::options::Options;

/// Debug values exposed to a renderer or debug sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugTargets {
    /// Rest-direction target derived from the most recent anchor pose.
    pub live_target: Vec3,
    /// Blended target driving the tip.
    pub dynamic_target: Vec3,
    /// Current member of the decaying bounce sequence.
    pub bounce_target: Vec3,
    /// Decay steps applied in the current bounce sequence.
    pub bounce_step: u32,
    /// Regime of the last frame.
    pub mode: SimulationMode,
}

/// All state one attached bone carries between frames.
///
/// Positions are tracked at the live target: for a translating anchor it
/// moves exactly with the anchor, and anchor rotation registers as motion
/// too.
#[derive(Debug, Clone)]
pub(crate) struct BoneState {
    rest_offset: Vec3,
    target_reach: f32,
    log_targets: bool,
    classifier: MotionClassifier,
    tracker: TravelTracker,
    oscillator: BounceOscillator,
    blender: TargetBlender,
    driver: PoseDriver,
    live_target: Vec3,
    mode: SimulationMode,
}

impl BoneState {
    /// Capture the rest offset from the initial anchor and tip and seed
    /// every position to the rest pose.
    pub(crate) fn attach(
        options: &Options,
        anchor: &AnchorPose,
        tip: Vec3,
    ) -> Result<Self, JiggleError> {
        let world_offset = tip - anchor.position;
        if world_offset.length_squared() <= f32::EPSILON {
            return Err(JiggleError::DegenerateConfiguration(
                "tip coincides with anchor; rest direction undefined"
                    .to_owned(),
            ));
        }
        let rest_offset = anchor.rotation.inverse() * world_offset;
        let reach = options.follow.target_reach;
        let frame = RestFrame::from_anchor(anchor, rest_offset, reach);
        let live = frame.live_target;

        Ok(Self {
            rest_offset,
            target_reach: reach,
            log_targets: options.debug.log_targets,
            classifier: MotionClassifier::new(&options.motion, live),
            tracker: TravelTracker::new(&options.motion, live),
            oscillator: BounceOscillator::new(&options.bounce, live),
            blender: TargetBlender::new(&options.follow, live),
            driver: PoseDriver::new(
                options.follow.elasticity,
                tip,
                frame.target_offset(),
            ),
            live_target: live,
            mode: SimulationMode::Settling,
        })
    }

    /// Run one frame in the fixed stage order. `input.dt` has already been
    /// validated.
    pub(crate) fn advance(
        &mut self,
        input: &FrameInput,
    ) -> Result<TipPose, JiggleError> {
        let manipulated = input.manipulation.is_grabbed();
        let frame = RestFrame::from_anchor(
            &input.anchor,
            self.rest_offset,
            self.target_reach,
        );
        let live = frame.live_target;

        let motion = self.classifier.classify(live, input.dt, manipulated)?;

        let sample = TravelSample {
            position: live,
            in_motion: motion.in_motion,
            manipulated,
            sim_time: input.sim_time,
        };
        match self.tracker.update(&sample, self.oscillator.target()) {
            Some(TravelEvent::Started | TravelEvent::Released) => {
                self.oscillator.reset_steps();
            }
            Some(TravelEvent::Ended { net }) => self.oscillator.seed(net),
            None => {}
        }

        self.set_mode(SimulationMode::from_flags(
            manipulated,
            motion.in_motion,
        ));

        let goal = match input.manipulation {
            Manipulation::Grabbed(grab) => {
                self.oscillator.hold(grab);
                BlendGoal::Grab(grab)
            }
            Manipulation::Released if motion.in_motion => {
                BlendGoal::Live(live)
            }
            Manipulation::Released => {
                BlendGoal::Bounce(self.oscillator.advance(&BounceInput {
                    manipulated,
                    in_motion: motion.in_motion,
                    travel_end_captured: self.tracker.end_captured(),
                    live_target: live,
                    dynamic_target: self.blender.dynamic_target(),
                }))
            }
        };
        let dynamic = self.blender.blend(goal, input.dt);

        let pose = self.driver.drive(&frame, dynamic, manipulated);
        self.classifier.commit(live);
        self.live_target = live;

        if self.log_targets {
            log::trace!(
                "frame t={:.3}: mode={} live={} dynamic={} bounce={} tip={}",
                input.sim_time,
                self.mode.name(),
                live,
                dynamic,
                self.oscillator.target(),
                pose.position
            );
        }

        Ok(pose)
    }

    fn set_mode(&mut self, mode: SimulationMode) {
        if mode != self.mode {
            log::debug!("mode: {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
    }

    pub(crate) fn debug_targets(&self) -> DebugTargets {
        DebugTargets {
            live_target: self.live_target,
            dynamic_target: self.blender.dynamic_target(),
            bounce_target: self.oscillator.target(),
            bounce_step: self.oscillator.step(),
            mode: self.mode,
        }
    }

    pub(crate) fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub(crate) fn tip_position(&self) -> Vec3 {
        self.driver.position()
    }

    pub(crate) fn in_motion(&self) -> bool {
        self.classifier.in_motion()
    }

    pub(crate) fn travel_start(&self) -> Vec3 {
        self.tracker.start()
    }

    /// Rest offset in anchor-local space.
    pub(crate) fn rest_offset(&self) -> Vec3 {
        self.rest_offset
    }
}
