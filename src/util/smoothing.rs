//! Rate-to-lerp-factor models for frame-stepped target chasing.
//!
//! A blend "rate" is expressed per second; each frame it has to become a
//! lerp factor in `[0, 1]`. The linear model reproduces the classic
//! `lerp(a, b, rate * dt)` chase, which depends on the frame rate. The
//! exponential model gives the same decay regardless of how the elapsed time
//! is sliced into frames.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a per-second blend rate becomes a per-frame lerp factor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingModel {
    /// `rate * dt`. Behavior varies with frame rate.
    #[default]
    Linear,
    /// `1 - exp(-rate * dt)`. Frame-rate independent.
    Exponential,
}

impl SmoothingModel {
    /// Lerp factor for one frame of `dt` seconds at `rate` per second.
    ///
    /// Always clamped to `[0, 1]` so a blend never extrapolates past its
    /// endpoints, even on long frames.
    #[inline]
    #[must_use]
    pub fn factor(self, rate: f32, dt: f32) -> f32 {
        let t = match self {
            Self::Linear => rate * dt,
            Self::Exponential => 1.0 - (-rate * dt).exp(),
        };
        t.clamp(0.0, 1.0)
    }
}
