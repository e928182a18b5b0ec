// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use canopy_bvh::{Aabb, BoundingVolumeTree, Vec2};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_boxes(n: u16, cell: f32) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(usize::from(n) * usize::from(n));
    for y in 0..n {
        for x in 0..n {
            let min = Vec2::new(f32::from(x), f32::from(y)) * cell;
            out.push(Aabb::new(min, min + Vec2::splat(cell)));
        }
    }
    out
}

fn to_rstar_rects(v: &[Aabb]) -> Vec<Rectangle<[f32; 2]>> {
    v.iter()
        .map(|b| Rectangle::from_corners(b.min.to_array(), b.max.to_array()))
        .collect()
}

fn bench_build_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    for &n in &[64_u16, 128] {
        let boxes = gen_grid_boxes(n, 10.0);
        let probe = Aabb::from_coords(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements(boxes.len() as u64));

        group.bench_function(format!("canopy_build_query_n{n}"), |b| {
            b.iter_batched(
                || BoundingVolumeTree::new(boxes.len()),
                |mut tree| {
                    tree.construct(&boxes).unwrap();
                    let mut hits = Vec::new();
                    tree.intersections_with_volume(&probe, &mut hits).unwrap();
                    black_box(hits.len());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let envelope =
                        AABB::from_corners(probe.min.to_array(), probe.max.to_array());
                    let hits = tree.locate_in_envelope_intersecting(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        // Moved leaves: refit in place versus a bulk rebuild.
        let moved: Vec<Aabb> = boxes
            .iter()
            .map(|b| b.translate(Vec2::new(0.5, -0.5)))
            .collect();
        let mut tree = BoundingVolumeTree::new(boxes.len());
        tree.construct(&boxes).unwrap();
        group.bench_function(format!("canopy_refit_query_n{n}"), |b| {
            let mut hits = Vec::new();
            b.iter(|| {
                tree.update_leaf_volumes(&moved).unwrap();
                hits.clear();
                tree.intersections_with_volume(&probe, &mut hits).unwrap();
                black_box(hits.len());
            });
        });
        group.bench_function(format!("rstar_rebuild_query_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&moved),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let envelope =
                        AABB::from_corners(probe.min.to_array(), probe.max.to_array());
                    black_box(tree.locate_in_envelope_intersecting(&envelope).count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_query);
criterion_main!(benches);
