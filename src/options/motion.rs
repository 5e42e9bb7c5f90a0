use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Motion classification and travel tracking parameters.
pub struct MotionOptions {
    /// Speed (world units per second) below which the tracked point counts
    /// as stationary. Also the minimum approach distance for a reversal.
    #[schemars(title = "Motion Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.001))]
    pub threshold: f32,
    /// Consecutive stationary frames required before motion is declared
    /// over.
    #[schemars(title = "Debounce Frames", range(min = 0, max = 120))]
    pub debounce_frames: u32,
    /// Declare stillness immediately on any frame without a grab, bypassing
    /// the debounce counter. Disable to let the debounce govern free motion.
    #[schemars(title = "Release Forces Stillness")]
    pub release_forces_stillness: bool,
    /// Seconds of simulated time between direction-reversal checks.
    #[schemars(skip)]
    pub reversal_check_interval: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            debounce_frames: 15,
            release_forces_stillness: true,
            reversal_check_interval: 0.05,
        }
    }
}
