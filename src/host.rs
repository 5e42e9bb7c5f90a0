//! Seams to the host application.
//!
//! The simulation only consumes values; where they come from (a scene
//! graph, a tracked controller, a recorded take) is up to the host. These
//! traits name the collaborators and [`tick`] wires one frame through them.

use glam::Vec3;

use crate::bone::{
    AnchorPose, DebugTargets, FrameInput, JiggleBone, Manipulation,
};
use crate::error::JiggleError;
use crate::motion::TipPose;
use crate::util::frame_clock::FrameClock;

/// Supplies the anchor's world pose every frame.
pub trait PoseSource {
    /// Anchor pose for the current frame.
    fn anchor_pose(&mut self) -> AnchorPose;
}

/// Supplies already-debounced grab state every frame.
pub trait ManipulationSource {
    /// Grab state for the current frame.
    fn manipulation(&mut self) -> Manipulation;
}

/// Optional consumer of per-frame debug values (gizmos, plots, logs).
pub trait DebugSink {
    /// Called after every successful frame.
    fn record(&mut self, targets: &DebugTargets, pose: &TipPose);
}

impl<F: FnMut() -> AnchorPose> PoseSource for F {
    fn anchor_pose(&mut self) -> AnchorPose {
        self()
    }
}

/// Anchor that never moves.
impl PoseSource for AnchorPose {
    fn anchor_pose(&mut self) -> AnchorPose {
        *self
    }
}

/// Constant grab state.
impl ManipulationSource for Manipulation {
    fn manipulation(&mut self) -> Manipulation {
        *self
    }
}

/// Debug sink writing every frame to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn record(&mut self, targets: &DebugTargets, pose: &TipPose) {
        log::trace!(
            "{}: dynamic={} bounce={} step={} tip={}",
            targets.mode.name(),
            targets.dynamic_target,
            targets.bounce_target,
            targets.bounce_step,
            pose.position
        );
    }
}

/// Debug sink keeping the bounce amplitude of every frame.
#[derive(Debug, Default, Clone)]
pub struct AmplitudeRecorder {
    /// Distance between bounce and live target, one entry per frame.
    pub amplitudes: Vec<f32>,
    /// Tip positions, one entry per frame.
    pub tips: Vec<Vec3>,
}

impl DebugSink for AmplitudeRecorder {
    fn record(&mut self, targets: &DebugTargets, pose: &TipPose) {
        self.amplitudes
            .push(targets.bounce_target.distance(targets.live_target));
        self.tips.push(pose.position);
    }
}

/// Step `bone` once with input pulled from the given collaborators.
///
/// A failed frame is reported to the caller and skips the sink.
pub fn tick(
    bone: &mut JiggleBone,
    clock: &mut FrameClock,
    pose: &mut impl PoseSource,
    manipulation: &mut impl ManipulationSource,
    sink: Option<&mut dyn DebugSink>,
) -> Result<TipPose, JiggleError> {
    let time = clock.tick();
    let input = FrameInput {
        dt: time.dt,
        sim_time: time.sim_time,
        anchor: pose.anchor_pose(),
        manipulation: manipulation.manipulation(),
    };
    let tip = bone.step(&input)?;
    if let (Some(sink), Some(targets)) = (sink, bone.debug_targets()) {
        sink.record(&targets, &tip);
    }
    Ok(tip)
}
