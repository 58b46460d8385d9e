use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use patch_cables::{
    compute_cable_curve, CableOptions, Connection, Connector, Processor, SceneController,
    StoreAction, StoreState,
};
use std::hint::black_box;

fn bench_cable_curve(c: &mut Criterion) {
    let source = Vec2::new(-30.0, 11.0);
    let destination = Vec2::new(120.0, -85.0);

    c.bench_function("compute_cable_curve", |b| {
        b.iter(|| {
            let points = compute_cable_curve(black_box(source), black_box(destination));
            black_box(points.len())
        })
    });
}

/// Baut ein Raster aus Prozessoren, jeder mit dem rechten Nachbarn verbunden.
fn build_synthetic_patch(processor_count: usize) -> StoreState {
    let mut state = StoreState::new();

    for index in 0..processor_count {
        let x = (index % 100) as f32 * 25.0;
        let y = (index / 100) as f32 * -25.0;
        state.processors.insert(
            format!("p{index}"),
            Processor::new("epg", format!("P{index}"), Vec3::new(x, y, 0.0))
                .with_input("in", Connector::new("in", 0.0, 9.0))
                .with_output("out", Connector::new("out", 0.0, -9.0)),
        );
    }

    for index in 1..processor_count {
        state.connections.insert(
            format!("conn-{index}"),
            Connection::new(format!("p{}", index - 1), "out", format!("p{index}"), "in"),
        );
    }

    state
}

fn bench_redraw_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("redraw_all");

    for &processor_count in &[100usize, 1_000usize] {
        let state = build_synthetic_patch(processor_count);
        let mut controller = SceneController::new(CableOptions::default(), &state);
        controller.handle_action(
            &StoreAction::CreateProject(Box::new(state.clone())),
            &state,
        );

        group.bench_with_input(
            BenchmarkId::from_parameter(processor_count),
            &state,
            |b, state| {
                b.iter(|| {
                    controller.handle_action(
                        &StoreAction::DragAllProcessors { dx: 0.0, dy: 0.0 },
                        black_box(state),
                    );
                    black_box(controller.cables().group().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cable_curve, bench_redraw_all);
criterion_main!(benches);
