//! Scripted anchor and grab inputs for demos, benchmarks and tests.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bone::{AnchorPose, Manipulation};
use crate::host::{ManipulationSource, PoseSource};

/// A deterministic input script, sampled by frame index.
#[derive(Debug, Clone, PartialEq)]
pub enum Scenario {
    /// Anchor stays at the origin.
    Stationary,
    /// Anchor travels `distance` along +X over `frames` frames, then stops.
    SweepAndStop {
        /// Total travel.
        distance: f32,
        /// Frames spent travelling.
        frames: u32,
    },
    /// Anchor travels out along +X and halfway back, then stops.
    BackAndForth {
        /// Distance of the outbound leg.
        distance: f32,
        /// Frames per leg.
        frames_per_leg: u32,
    },
    /// Stationary anchor; the target is grabbed at `grab` for `hold_frames`
    /// frames, then released.
    GrabAndRelease {
        /// Grab position.
        grab: Vec3,
        /// Frames the grab is held.
        hold_frames: u32,
    },
    /// Small random jitter around the origin for `frames` frames, then
    /// still. The `tremor` preset stays under the default motion threshold
    /// at 60 Hz.
    Tremor {
        /// Maximum offset per axis.
        amplitude: f32,
        /// Frames of jitter.
        frames: u32,
        /// RNG seed.
        seed: u64,
    },
}

impl Scenario {
    /// Look up a scenario preset by name.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "stationary" => Some(Self::Stationary),
            "sweep" => Some(Self::SweepAndStop {
                distance: 1.0,
                frames: 30,
            }),
            "back-and-forth" => Some(Self::BackAndForth {
                distance: 1.0,
                frames_per_leg: 20,
            }),
            "grab" => Some(Self::GrabAndRelease {
                grab: Vec3::new(0.0, 1.0, 0.0),
                hold_frames: 10,
            }),
            "tremor" => Some(Self::Tremor {
                amplitude: 0.000_04,
                frames: 120,
                seed: 7,
            }),
            _ => None,
        }
    }

    /// Names accepted by [`named`](Self::named).
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["stationary", "sweep", "back-and-forth", "grab", "tremor"]
    }

    /// Anchor pose and grab state at frame `frame` (0-based).
    #[must_use]
    pub fn sample(&self, frame: u32) -> (AnchorPose, Manipulation) {
        match *self {
            Self::Stationary => {
                (AnchorPose::default(), Manipulation::Released)
            }
            Self::SweepAndStop { distance, frames } => {
                let x = distance * progress(frame, frames);
                (AnchorPose::at(Vec3::X * x), Manipulation::Released)
            }
            Self::BackAndForth {
                distance,
                frames_per_leg,
            } => {
                let out = distance * progress(frame, frames_per_leg);
                let back = 0.5
                    * distance
                    * progress(
                        frame.saturating_sub(frames_per_leg),
                        frames_per_leg,
                    );
                (AnchorPose::at(Vec3::X * (out - back)), Manipulation::Released)
            }
            Self::GrabAndRelease { grab, hold_frames } => {
                let manipulation = if frame < hold_frames {
                    Manipulation::Grabbed(grab)
                } else {
                    Manipulation::Released
                };
                (AnchorPose::default(), manipulation)
            }
            Self::Tremor {
                amplitude,
                frames,
                seed,
            } => {
                if frame >= frames {
                    return (AnchorPose::default(), Manipulation::Released);
                }
                let mut rng =
                    StdRng::seed_from_u64(seed ^ u64::from(frame));
                let jitter = Vec3::new(
                    rng.random_range(-amplitude..=amplitude),
                    rng.random_range(-amplitude..=amplitude),
                    rng.random_range(-amplitude..=amplitude),
                );
                (AnchorPose::at(jitter), Manipulation::Released)
            }
        }
    }
}

fn progress(frame: u32, frames: u32) -> f32 {
    if frames == 0 {
        1.0
    } else {
        (frame.min(frames) as f32) / frames as f32
    }
}

/// Plays a [`Scenario`] frame by frame.
///
/// The pose and manipulation sides keep separate frame counters, each
/// advanced when sampled, so a host can hand two clones of one player to
/// the two collaborator slots.
#[derive(Debug, Clone)]
pub struct ScenarioPlayer {
    scenario: Scenario,
    pose_frame: u32,
    grab_frame: u32,
}

impl ScenarioPlayer {
    /// Start `scenario` at frame 0.
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            pose_frame: 0,
            grab_frame: 0,
        }
    }

    /// Anchor poses sampled so far.
    pub fn frame(&self) -> u32 {
        self.pose_frame
    }
}

impl PoseSource for ScenarioPlayer {
    fn anchor_pose(&mut self) -> AnchorPose {
        let (pose, _) = self.scenario.sample(self.pose_frame);
        self.pose_frame += 1;
        pose
    }
}

impl ManipulationSource for ScenarioPlayer {
    fn manipulation(&mut self) -> Manipulation {
        let (_, manipulation) = self.scenario.sample(self.grab_frame);
        self.grab_frame += 1;
        manipulation
    }
}
