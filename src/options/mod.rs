//! Centralized simulation options with TOML preset support.
//!
//! Every tunable of a jiggle bone (motion classification, bounce decay,
//! follow behavior, debug output) is consolidated here. Options serialize
//! to/from TOML so rigs can ship named presets.

mod bounce;
mod debug;
mod follow;
mod motion;

use std::path::Path;

pub use bounce::BounceOptions;
pub use debug::DebugOptions;
pub use follow::FollowOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::JiggleError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bounce]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Motion classification and travel tracking.
    pub motion: MotionOptions,
    /// Overshoot decay.
    pub bounce: BounceOptions,
    /// Target blending and tip follow.
    pub follow: FollowOptions,
    /// Debug output.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The loaded options are validated before being returned.
    pub fn load(path: &Path) -> Result<Self, JiggleError> {
        let content =
            std::fs::read_to_string(path).map_err(JiggleError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| JiggleError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), JiggleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| JiggleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(JiggleError::Io)?;
        }
        std::fs::write(path, content).map_err(JiggleError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject parameter combinations the simulation cannot run with.
    ///
    /// A decay factor of zero would divide by zero and anything below one
    /// grows the bounce instead of damping it, so the factor must lie in
    /// `[1, 10]`.
    pub fn validate(&self) -> Result<(), JiggleError> {
        let decay = self.bounce.decay_factor;
        if !decay.is_finite() || !(1.0..=10.0).contains(&decay) {
            return Err(degenerate(format!(
                "bounce.decay_factor {decay} outside [1, 10]"
            )));
        }
        let elasticity = self.follow.elasticity;
        if !elasticity.is_finite() || !(0.0..=1.0).contains(&elasticity) {
            return Err(degenerate(format!(
                "follow.elasticity {elasticity} outside [0, 1]"
            )));
        }
        non_negative("motion.threshold", self.motion.threshold)?;
        non_negative(
            "bounce.stabilization_epsilon",
            self.bounce.stabilization_epsilon,
        )?;
        non_negative("follow.follow_speed", self.follow.follow_speed)?;
        non_negative(
            "follow.motion_blend_rate",
            self.follow.motion_blend_rate,
        )?;
        positive(
            "motion.reversal_check_interval",
            self.motion.reversal_check_interval,
        )?;
        positive("follow.target_reach", self.follow.target_reach)
    }
}

fn degenerate(msg: String) -> JiggleError {
    JiggleError::DegenerateConfiguration(msg)
}

fn non_negative(name: &str, value: f32) -> Result<(), JiggleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(degenerate(format!("{name} {value} must be >= 0")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), JiggleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(degenerate(format!("{name} {value} must be > 0")))
    }
}
