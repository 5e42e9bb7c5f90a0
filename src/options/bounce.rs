use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounce", inline)]
#[serde(default)]
/// Overshoot decay parameters.
pub struct BounceOptions {
    /// Each bounce displacement is divided by this factor. Near 1 keeps
    /// oscillating, large values damp quickly.
    #[schemars(title = "Decay Factor", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub decay_factor: f32,
    /// Distance under which a target counts as reached.
    #[schemars(title = "Stabilization Epsilon", range(min = 0.0001, max = 0.1), extend("step" = 0.0001))]
    pub stabilization_epsilon: f32,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            decay_factor: 2.0,
            stabilization_epsilon: 0.01,
        }
    }
}
