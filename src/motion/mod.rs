//! Per-frame secondary-motion pipeline.
//!
//! Each frame flows one way through four stages:
//!
//! 1. [`MotionClassifier`] - velocity of the tracked point and a debounced
//!    in-motion flag.
//! 2. [`TravelTracker`] - start/end of the current travel segment, with
//!    reversal correction, yielding the net travel vector.
//! 3. [`BounceOscillator`] - geometrically decaying overshoot targets once
//!    motion stops or a grab is released.
//! 4. [`TargetBlender`] and [`PoseDriver`] - the blended dynamic target and
//!    the tip pose derived from it.
//!
//! [`crate::bone::JiggleBone`] owns one instance of each stage and runs
//! them in that order.

mod blend;
mod bounce;
mod classifier;
mod pose;
mod travel;

pub use blend::{BlendGoal, TargetBlender};
pub use bounce::{BounceInput, BounceOscillator};
pub use classifier::{Classification, MotionClassifier};
pub use pose::{look_rotation, move_towards, PoseDriver, RestFrame, TipPose};
pub use travel::{TravelEvent, TravelSample, TravelTracker};

/// Which regime drives the dynamic target this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    /// The tracked point is moving; the dynamic target chases the live
    /// target.
    Moving,
    /// Motion has stopped; the dynamic target chases decaying bounce
    /// targets.
    #[default]
    Settling,
    /// An external grab places the target directly.
    Manipulated,
}

impl SimulationMode {
    /// Mode implied by this frame's manipulation and motion flags.
    /// Manipulation overrides motion.
    #[must_use]
    pub fn from_flags(manipulated: bool, in_motion: bool) -> Self {
        if manipulated {
            Self::Manipulated
        } else if in_motion {
            Self::Moving
        } else {
            Self::Settling
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Moving => "moving",
            Self::Settling => "settling",
            Self::Manipulated => "manipulated",
        }
    }
}
