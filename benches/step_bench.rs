//! Per-frame cost of the jiggle simulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use jiggle::bone::{AnchorPose, FrameInput, JiggleBone};
use jiggle::host::PoseSource;
use jiggle::options::Options;
use jiggle::scenario::{Scenario, ScenarioPlayer};
use jiggle::util::smoothing::SmoothingModel;

const DT: f32 = 1.0 / 60.0;

fn attached_bone() -> JiggleBone {
    let mut bone = JiggleBone::new(Options::default()).unwrap();
    bone.attach(AnchorPose::default(), Vec3::new(0.0, 0.0, 0.2))
        .unwrap();
    bone
}

fn smoothing_benchmark(c: &mut Criterion) {
    let model = SmoothingModel::Exponential;
    let _ = c.bench_function("exponential_factor", |b| {
        b.iter(|| black_box(model.factor(black_box(5.0), black_box(DT))))
    });
}

fn single_step_benchmark(c: &mut Criterion) {
    let mut bone = attached_bone();
    let mut sim_time = 0.0;
    let _ = c.bench_function("single_step_settling", |b| {
        b.iter(|| {
            sim_time += f64::from(DT);
            let input = FrameInput::new(DT, sim_time, AnchorPose::default());
            black_box(bone.step(black_box(&input)).unwrap())
        })
    });
}

fn scenario_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_600_frames");

    for name in ["sweep", "back-and-forth", "tremor"] {
        let scenario = Scenario::named(name).unwrap();
        let _ = group.bench_function(name, |b| {
            b.iter(|| {
                let mut bone = attached_bone();
                let mut poses = ScenarioPlayer::new(scenario.clone());
                let mut sim_time = 0.0;
                for _ in 0..600 {
                    sim_time += f64::from(DT);
                    let input =
                        FrameInput::new(DT, sim_time, poses.anchor_pose());
                    let _ = black_box(bone.step(&input).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    smoothing_benchmark,
    single_step_benchmark,
    scenario_benchmark
);
criterion_main!(benches);
