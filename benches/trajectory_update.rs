use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use trajectory_editor::scene::{Geometry, Scene, SceneObject};
use trajectory_editor::trajectory::shapes::circle;
use trajectory_editor::trajectory::{format_points, parse_points, Trajectory};

const FRAME_DELTA: f32 = 1.0 / 60.0;

/// Benchmark: One playback step on a small loop
fn bench_single_update(c: &mut Criterion) {
    let mut trajectory = circle(3.0, 8, 1.0);
    trajectory.start();

    c.bench_function("trajectory_update_frame", |b| {
        b.iter(|| {
            trajectory.update(black_box(FRAME_DELTA));
            black_box(trajectory.current_position())
        })
    });
}

/// Benchmark: A step many loops long on trajectories of growing size
fn bench_large_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_delta");

    for count in [8, 64, 512].iter() {
        let trajectory = circle(3.0, *count, 0.25);

        group.bench_with_input(BenchmarkId::new("points", count), count, |b, _| {
            b.iter(|| {
                let mut trajectory = trajectory.clone();
                trajectory.start();
                trajectory.update(black_box(1000.0));
                black_box(trajectory.current_position())
            })
        });
    }

    group.finish();
}

/// Benchmark: Scene update with every object playing
fn bench_scene_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_update");

    for count in [10, 100, 1000].iter() {
        let mut scene = Scene::new();
        for i in 0..*count {
            let mut object = SceneObject::new(format!("object_{}", i), Geometry::unit_cube());
            object.trajectory = circle(1.0 + i as f32 * 0.01, 8, 1.0);
            object.trajectory.start();
            scene.add_object(object);
        }

        group.bench_with_input(BenchmarkId::new("objects", count), count, |b, _| {
            b.iter(|| scene.update(black_box(FRAME_DELTA)))
        });
    }

    group.finish();
}

/// Benchmark: Text format of a long trajectory
fn bench_format_parse(c: &mut Criterion) {
    let trajectory = circle(5.0, 1000, 0.5);
    let text = format_points(trajectory.control_points());

    c.bench_function("format_1000_points", |b| {
        b.iter(|| black_box(format_points(black_box(trajectory.control_points()))))
    });

    c.bench_function("parse_1000_points", |b| {
        b.iter(|| black_box(parse_points(black_box(&text))))
    });

    c.bench_function("add_control_point", |b| {
        b.iter(|| {
            let mut trajectory = Trajectory::new();
            for i in 0..100 {
                trajectory.add_control_point(Vec3::splat(i as f32), 1.0);
            }
            black_box(trajectory.point_count())
        })
    });
}

criterion_group!(
    benches,
    bench_single_update,
    bench_large_delta,
    bench_scene_update,
    bench_format_parse
);
criterion_main!(benches);
