// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the animation core and the mesh sanitation pass.
//!
//! The reveal tick runs at frame rate over every attached target, and the
//! sanitation pass runs once per asset load; both must stay cheap enough to
//! never show up in a frame profile.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::motion::timing::{AnimationSpec, Pose};
use iced_folio::motion::{PageRegion, RevealConfig, RevealController, TriggerBand};
use iced_folio::scene::geometry::MeshGeometry;
use iced_folio::scene::sanitize::sanitize;
use std::hint::black_box;
use std::time::{Duration, Instant};

fn reveal_tick(c: &mut Criterion) {
    let start = Instant::now();
    let mut controller = RevealController::new(start);
    for index in 0..200 {
        controller.attach(
            PageRegion::new(index as f32 * 300.0, 280.0),
            RevealConfig {
                hidden: Pose::hidden(0.0, 80.0, 0.95),
                anim: AnimationSpec {
                    duration: Duration::from_millis(1000),
                    ..AnimationSpec::default()
                },
                band: TriggerBand::new(0.85, 0.0),
                ..RevealConfig::default()
            },
        );
    }
    // Put a band of targets mid-animation.
    controller.set_viewport(10_000.0, 800.0, start);

    c.bench_function("reveal_tick_200_targets", |b| {
        let mut now = start;
        b.iter(|| {
            now += Duration::from_millis(16);
            black_box(controller.tick(now));
        });
    });

    c.bench_function("reveal_scroll_200_targets", |b| {
        let mut offset = 0.0f32;
        b.iter(|| {
            offset = (offset + 120.0) % 60_000.0;
            controller.set_viewport(black_box(offset), 800.0, start);
        });
    });
}

fn sanitation_pass(c: &mut Criterion) {
    let vertex_count = 50_000;
    let mut positions = vec![1.0f32; vertex_count * 3];
    // Sprinkle invalid values the way a broken exporter would.
    for index in (0..positions.len()).step_by(997) {
        positions[index] = f32::NAN;
    }
    let normals = vec![0.0f32; vertex_count * 3];

    c.bench_function("sanitize_50k_vertices", |b| {
        b.iter(|| {
            let mut mesh =
                MeshGeometry::new(positions.clone(), normals.clone()).expect("valid shape");
            black_box(sanitize(&mut mesh));
        });
    });
}

criterion_group!(benches, reveal_tick, sanitation_pass);
criterion_main!(benches);
