use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug output toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Trace dynamic and bounce targets every frame.
    #[schemars(title = "Log Targets")]
    pub log_targets: bool,
}
