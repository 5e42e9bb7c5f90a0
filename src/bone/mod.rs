//! The jiggle bone: one anchor, one simulated tip.
//!
//! A [`JiggleBone`] is created from validated [`Options`], attached to an
//! anchor once (capturing the rest offset from the initial anchor and tip
//! positions), then stepped once per frame. Each instance owns all of its
//! state, so independent bones can be stepped from different threads.

mod input;
mod state;

use glam::Vec3;
pub use input::{AnchorPose, FrameInput, Manipulation};
pub use state::DebugTargets;
use state::BoneState;

use crate::error::{check_timestep, JiggleError};
use crate::motion::{SimulationMode, TipPose};
use crate::options::Options;

/// Procedural secondary-motion simulator for a single tip.
#[derive(Debug, Clone)]
pub struct JiggleBone {
    options: Options,
    state: Option<BoneState>,
}

impl JiggleBone {
    /// Create an unattached bone. Fails with
    /// [`JiggleError::DegenerateConfiguration`] if the options cannot be
    /// simulated.
    pub fn new(options: Options) -> Result<Self, JiggleError> {
        options.validate()?;
        Ok(Self {
            options,
            state: None,
        })
    }

    /// Attach to an anchor, capturing the rest offset from the anchor's and
    /// the tip's current world positions. Re-attaching discards all
    /// simulation state.
    pub fn attach(
        &mut self,
        anchor: AnchorPose,
        tip: Vec3,
    ) -> Result<(), JiggleError> {
        let state = BoneState::attach(&self.options, &anchor, tip)?;
        log::debug!(
            "attached: anchor {} tip {} rest offset {}",
            anchor.position,
            tip,
            state.rest_offset()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Drop all simulation state. The bone must be attached again before
    /// stepping.
    pub fn detach(&mut self) {
        self.state = None;
    }

    /// Whether [`attach`](Self::attach) has succeeded.
    pub fn is_attached(&self) -> bool {
        self.state.is_some()
    }

    /// Advance one frame and return the tip pose.
    ///
    /// A rejected frame leaves every piece of state exactly as it was.
    pub fn step(&mut self, input: &FrameInput) -> Result<TipPose, JiggleError> {
        let state = self
            .state
            .as_mut()
            .ok_or(JiggleError::UninitializedInstance)?;
        if let Err(e) = check_timestep(input.dt) {
            log::warn!("skipping frame at t={}: {e}", input.sim_time);
            return Err(e);
        }
        state.advance(input)
    }

    /// Options this bone was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Regime of the last frame, if attached.
    pub fn mode(&self) -> Option<SimulationMode> {
        self.state.as_ref().map(BoneState::mode)
    }

    /// Dynamic, bounce and live targets for visualization, if attached.
    pub fn debug_targets(&self) -> Option<DebugTargets> {
        self.state.as_ref().map(BoneState::debug_targets)
    }

    /// Current simulated tip position, if attached.
    pub fn tip_position(&self) -> Option<Vec3> {
        self.state.as_ref().map(BoneState::tip_position)
    }

    /// Whether the tracked point is currently classified as moving.
    pub fn in_motion(&self) -> bool {
        self.state.as_ref().is_some_and(BoneState::in_motion)
    }

    /// Origin of the current travel segment, if attached.
    pub fn travel_start(&self) -> Option<Vec3> {
        self.state.as_ref().map(BoneState::travel_start)
    }

    /// Anchor-local rest offset captured at attach time, if attached.
    pub fn rest_offset(&self) -> Option<Vec3> {
        self.state.as_ref().map(BoneState::rest_offset)
    }
}
