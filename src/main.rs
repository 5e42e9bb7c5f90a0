//! Headless jiggle demo: plays a scripted scenario through one bone and logs
//! the tip trajectory.
//!
//! Usage: `jiggle [scenario] [options.toml] [frames]`

use std::path::Path;

use glam::Vec3;
use jiggle::bone::{AnchorPose, DebugTargets, JiggleBone};
use jiggle::error::JiggleError;
use jiggle::host::{tick, AmplitudeRecorder, DebugSink, LogSink};
use jiggle::motion::TipPose;
use jiggle::options::Options;
use jiggle::scenario::{Scenario, ScenarioPlayer};
use jiggle::util::frame_clock::FrameClock;

const DEFAULT_FRAMES: u32 = 600;

/// Feeds the amplitude recorder, and the log when target logging is on.
struct DemoSink {
    log: Option<LogSink>,
    recorder: AmplitudeRecorder,
}

impl DebugSink for DemoSink {
    fn record(&mut self, targets: &DebugTargets, pose: &TipPose) {
        if let Some(log) = &mut self.log {
            log.record(targets, pose);
        }
        self.recorder.record(targets, pose);
    }
}

impl DemoSink {
    fn for_options(options: &Options) -> Self {
        Self {
            log: options.debug.log_targets.then_some(LogSink),
            recorder: AmplitudeRecorder::default(),
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "sweep".to_owned());
    let Some(scenario) = Scenario::named(&name) else {
        log::error!(
            "Unknown scenario '{name}'. Available: {}",
            Scenario::names().join(", ")
        );
        std::process::exit(1);
    };

    let options = match args.next() {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options preset '{path}'");
                options
            }
            Err(e) => {
                log::error!("Failed to load options preset '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    if let Err(e) = run(scenario, options, frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(
    scenario: Scenario,
    options: Options,
    frames: u32,
) -> Result<(), JiggleError> {
    let mut bone = JiggleBone::new(options)?;
    bone.attach(AnchorPose::default(), Vec3::new(0.0, 0.0, 0.2))?;

    let mut clock = FrameClock::fixed(1.0 / 60.0);
    let mut poses = ScenarioPlayer::new(scenario);
    let mut grabs = poses.clone();
    let mut sink = DemoSink::for_options(bone.options());

    for _ in 0..frames {
        let pose = tick(
            &mut bone,
            &mut clock,
            &mut poses,
            &mut grabs,
            Some(&mut sink),
        )?;
        log::debug!(
            "frame {}: tip {} forward {}",
            poses.frame(),
            pose.position,
            pose.forward
        );
    }

    let peak = sink
        .recorder
        .amplitudes
        .iter()
        .copied()
        .fold(0.0_f32, f32::max);
    let last = sink.recorder.amplitudes.last().copied().unwrap_or(0.0);
    let mut distinct = sink.recorder.amplitudes.clone();
    distinct.dedup();
    let (mode, steps) = bone
        .debug_targets()
        .map_or(("detached", 0), |t| (t.mode.name(), t.bounce_step));
    log::info!(
        "{frames} frames at {:.0} fps: peak bounce amplitude {peak:.4}, \
         final {last:.4}, tip at {}",
        clock.fps(),
        bone.tip_position().unwrap_or(Vec3::ZERO)
    );
    log::info!(
        "final mode {mode}, {steps} bounce steps in the last segment, \
         {} distinct amplitudes",
        distinct.len()
    );
    Ok(())
}
