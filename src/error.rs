//! Crate-level error types.

use std::fmt;

/// Errors produced by the jiggle crate.
#[derive(Debug)]
pub enum JiggleError {
    /// Frame delta was zero, negative or not finite. The frame is skipped
    /// and no simulation state is touched.
    InvalidTimestep {
        /// The rejected delta, in seconds.
        dt: f32,
    },
    /// `step` was called before the bone was attached to an anchor.
    UninitializedInstance,
    /// Configuration or rest pose that would make the simulation divide by
    /// zero or diverge.
    DegenerateConfiguration(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for JiggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep { dt } => {
                write!(f, "invalid timestep: dt = {dt} (must be > 0)")
            }
            Self::UninitializedInstance => {
                write!(f, "bone stepped before being attached to an anchor")
            }
            Self::DegenerateConfiguration(msg) => {
                write!(f, "degenerate configuration: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for JiggleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JiggleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reject frame deltas that cannot be divided by.
pub(crate) fn check_timestep(dt: f32) -> Result<(), JiggleError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(JiggleError::InvalidTimestep { dt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestep_must_be_positive_and_finite() {
        assert!(check_timestep(1.0 / 60.0).is_ok());
        assert!(matches!(
            check_timestep(0.0),
            Err(JiggleError::InvalidTimestep { .. })
        ));
        assert!(check_timestep(-0.016).is_err());
        assert!(check_timestep(f32::NAN).is_err());
        assert!(check_timestep(f32::INFINITY).is_err());
    }

    #[test]
    fn display_mentions_rejected_dt() {
        let msg = JiggleError::InvalidTimestep { dt: 0.0 }.to_string();
        assert!(msg.contains("dt = 0"));
    }
}
