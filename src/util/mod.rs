//! Shared utilities for the simulation.
//!
//! Helpers for frame timing and rate-to-lerp-factor smoothing.

pub mod frame_clock;
pub mod smoothing;
