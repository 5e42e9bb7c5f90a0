//! Per-frame inputs supplied by the host.

use glam::{Quat, Vec3};

/// World-space pose of the anchor (parent joint).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    /// World position.
    pub position: Vec3,
    /// World rotation; the rest offset is expressed in this frame.
    pub rotation: Quat,
}

impl AnchorPose {
    /// Unrotated anchor at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Anchor at `position` with `rotation`.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for AnchorPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Already-debounced grab state from the manipulation source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Manipulation {
    /// Nothing holds the tip.
    #[default]
    Released,
    /// The tip's target is held at this world position.
    Grabbed(Vec3),
}

impl Manipulation {
    /// Whether a grab is active.
    #[must_use]
    pub fn is_grabbed(self) -> bool {
        matches!(self, Self::Grabbed(_))
    }

    /// Grab position, if grabbed.
    #[must_use]
    pub fn grab_position(self) -> Option<Vec3> {
        match self {
            Self::Grabbed(position) => Some(position),
            Self::Released => None,
        }
    }
}

/// Everything one `step` consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame. Must be > 0.
    pub dt: f32,
    /// Monotonic simulated time in seconds.
    pub sim_time: f64,
    /// Anchor pose this frame.
    pub anchor: AnchorPose,
    /// Grab state this frame.
    pub manipulation: Manipulation,
}

impl FrameInput {
    /// Ungrabbed frame.
    #[must_use]
    pub fn new(dt: f32, sim_time: f64, anchor: AnchorPose) -> Self {
        Self {
            dt,
            sim_time,
            anchor,
            manipulation: Manipulation::Released,
        }
    }

    /// Same frame with the target grabbed at `position`.
    #[must_use]
    pub fn grabbed(mut self, position: Vec3) -> Self {
        self.manipulation = Manipulation::Grabbed(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manipulation_accessors() {
        assert!(!Manipulation::Released.is_grabbed());
        assert_eq!(Manipulation::Released.grab_position(), None);
        let grab = Manipulation::Grabbed(Vec3::Y);
        assert!(grab.is_grabbed());
        assert_eq!(grab.grab_position(), Some(Vec3::Y));
    }

    #[test]
    fn frame_builder() {
        let frame = FrameInput::new(0.5, 1.0, AnchorPose::default())
            .grabbed(Vec3::X);
        assert_eq!(frame.manipulation, Manipulation::Grabbed(Vec3::X));
        assert_eq!(frame.anchor.rotation, Quat::IDENTITY);
    }
}
