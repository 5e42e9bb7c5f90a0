//! Tip pose derivation from the dynamic target.

use glam::{Mat3, Quat, Vec3};

use crate::bone::AnchorPose;

/// Simulated tip pose for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipPose {
    /// World-space tip position.
    pub position: Vec3,
    /// World-space orientation; local +Z points along `forward`.
    pub rotation: Quat,
    /// Unit direction from the tip toward the dynamic target.
    pub forward: Vec3,
}

/// Rigid rest pose implied by the anchor this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestFrame {
    /// Where the tip would sit if perfectly rigid.
    pub rest_tip: Vec3,
    /// Rest-direction target beyond the rigid tip.
    pub live_target: Vec3,
}

impl RestFrame {
    /// Project the anchor-local `rest_offset` through the anchor pose.
    /// The live target sits `reach` rest offsets beyond the rigid tip.
    #[must_use]
    pub fn from_anchor(
        anchor: &AnchorPose,
        rest_offset: Vec3,
        reach: f32,
    ) -> Self {
        let offset = anchor.rotation * rest_offset;
        let rest_tip = anchor.position + offset;
        Self {
            rest_tip,
            live_target: rest_tip + offset * reach,
        }
    }

    /// Vector from the rigid tip to the live target.
    #[must_use]
    pub fn target_offset(&self) -> Vec3 {
        self.live_target - self.rest_tip
    }
}

/// Moves the tip toward the dynamic target, bounded per frame.
#[derive(Debug, Clone)]
pub struct PoseDriver {
    elasticity: f32,
    position: Vec3,
    forward: Vec3,
}

impl PoseDriver {
    /// Create a driver with the tip at `position` looking along `forward`.
    pub fn new(elasticity: f32, position: Vec3, forward: Vec3) -> Self {
        Self {
            elasticity,
            position,
            forward: forward.normalize_or(Vec3::Z),
        }
    }

    /// Derive this frame's tip pose.
    ///
    /// The tip targets `dynamic_target` minus the rest offset between the
    /// rigid tip and the live target, recomputed from `frame` every call.
    /// Orientation looks from the current tip toward the dynamic target. The
    /// position then steps toward its target by at most the elasticity, or
    /// jumps there while grabbed.
    pub fn drive(
        &mut self,
        frame: &RestFrame,
        dynamic_target: Vec3,
        manipulated: bool,
    ) -> TipPose {
        let target_tip = dynamic_target - frame.target_offset();

        let look = dynamic_target - self.position;
        if look.length_squared() > f32::EPSILON {
            self.forward = look.normalize();
        }

        let max_step = if manipulated {
            f32::INFINITY
        } else {
            self.elasticity
        };
        self.position = move_towards(self.position, target_tip, max_step);

        TipPose {
            position: self.position,
            rotation: look_rotation(self.forward, Vec3::Y),
            forward: self.forward,
        }
    }

    /// Current tip position.
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

/// Step from `current` toward `target` by at most `max_step`.
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_step || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_step
    }
}

/// Rotation taking local +Z to `forward` with local +Y as close to `up` as
/// possible. Falls back to +Z as the up hint when `forward` is parallel to
/// `up`.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or(Vec3::Z);
    let hint = if forward.cross(up).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        up
    };
    let right = hint.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
