use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::smoothing::SmoothingModel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Target blending and tip follow parameters.
pub struct FollowOptions {
    /// Blend rate (per second) toward the current bounce target while
    /// settling.
    #[schemars(title = "Follow Speed", range(min = 0.0, max = 30.0), extend("step" = 0.1))]
    pub follow_speed: f32,
    /// Blend rate (per second) toward the live target while moving. With
    /// the linear model a rate of 1 makes the lerp factor the raw frame
    /// delta.
    #[schemars(title = "Motion Blend Rate", range(min = 0.0, max = 30.0), extend("step" = 0.1))]
    pub motion_blend_rate: f32,
    /// How rates are turned into per-frame lerp factors.
    #[schemars(title = "Smoothing")]
    pub smoothing: SmoothingModel,
    /// Maximum tip travel per frame while not grabbed (world units).
    #[schemars(title = "Elasticity", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub elasticity: f32,
    /// How far past the rest tip the live target sits, as a multiple of
    /// the rest offset.
    #[schemars(skip)]
    pub target_reach: f32,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            follow_speed: 5.0,
            motion_blend_rate: 1.0,
            smoothing: SmoothingModel::Linear,
            elasticity: 0.05,
            target_reach: 1.0,
        }
    }
}
