//! Dynamic target blending.

use glam::Vec3;

use crate::options::FollowOptions;
use crate::util::smoothing::SmoothingModel;

/// What the dynamic target heads for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlendGoal {
    /// Grab position; taken immediately, no interpolation.
    Grab(Vec3),
    /// Live target while moving, blended at the motion rate.
    Live(Vec3),
    /// Current bounce target while settling, blended at the follow speed.
    Bounce(Vec3),
}

/// Owns the dynamic target and chases the frame's goal with it.
#[derive(Debug, Clone)]
pub struct TargetBlender {
    smoothing: SmoothingModel,
    motion_blend_rate: f32,
    follow_speed: f32,
    dynamic: Vec3,
}

impl TargetBlender {
    /// Create a blender whose dynamic target starts at `position`.
    pub fn new(options: &FollowOptions, position: Vec3) -> Self {
        Self {
            smoothing: options.smoothing,
            motion_blend_rate: options.motion_blend_rate,
            follow_speed: options.follow_speed,
            dynamic: position,
        }
    }

    /// Move the dynamic target toward `goal` for a frame of `dt` seconds
    /// and return it.
    ///
    /// The result always lies on the segment between the previous dynamic
    /// target and the goal.
    pub fn blend(&mut self, goal: BlendGoal, dt: f32) -> Vec3 {
        self.dynamic = match goal {
            BlendGoal::Grab(position) => position,
            BlendGoal::Live(live) => self.dynamic.lerp(
                live,
                self.smoothing.factor(self.motion_blend_rate, dt),
            ),
            BlendGoal::Bounce(bounce) => self
                .dynamic
                .lerp(bounce, self.smoothing.factor(self.follow_speed, dt)),
        };
        self.dynamic
    }

    /// Current dynamic target.
    pub fn dynamic_target(&self) -> Vec3 {
        self.dynamic
    }
}
