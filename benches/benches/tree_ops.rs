// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;

use canopy_bvh::{Aabb, BoundingVolumeTree, Mbc, Vec2};
use canopy_reduce::{AabbUnion, AccumulatedProduct, Sum};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

fn gen_random_boxes(count: usize, extent: f32, size: f32, seed: u64) -> Vec<Aabb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let min = Vec2::new(
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            );
            Aabb::new(min, min + Vec2::splat(size))
        })
        .collect()
}

fn gen_random_circles(count: usize, extent: f32, radius: f32, seed: u64) -> Vec<Mbc> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let center = Vec2::new(
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            );
            Mbc::new(center, radius)
        })
        .collect()
}

fn jitter(boxes: &[Aabb], amount: f32, seed: u64) -> Vec<Aabb> {
    let mut rng = StdRng::seed_from_u64(seed);
    boxes
        .iter()
        .map(|b| {
            b.translate(Vec2::new(
                rng.random_range(-amount..amount),
                rng.random_range(-amount..amount),
            ))
        })
        .collect()
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &n in &[32_u16, 64, 128] {
        let boxes = gen_grid_boxes(n, 10.0);
        group.throughput(Throughput::Elements(boxes.len() as u64));
        group.bench_function(format!("grid_aabb_n{n}"), |b| {
            b.iter_batched(
                || BoundingVolumeTree::new(boxes.len()),
                |mut tree| {
                    tree.construct(black_box(&boxes)).unwrap();
                    black_box(tree.root());
                },
                BatchSize::SmallInput,
            );
        });
    }
    for &count in &[1_000_usize, 10_000] {
        let circles = gen_random_circles(count, 1000.0, 2.0, 0xC1AC_1E5);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_mbc_{count}"), |b| {
            let mut tree = BoundingVolumeTree::new(count);
            b.iter(|| {
                tree.construct(black_box(&circles)).unwrap();
                black_box(tree.root());
            });
        });
    }
    group.finish();
}

fn bench_refit(c: &mut Criterion) {
    let mut group = c.benchmark_group("refit");
    for &count in &[1_000_usize, 10_000, 50_000] {
        let boxes = gen_random_boxes(count, 2000.0, 4.0, 0x5EED);
        let moved = jitter(&boxes, 1.0, 0x0DD5);
        let mut tree = BoundingVolumeTree::new(count);
        tree.construct(&boxes).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("update_leaf_volumes_{count}"), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let leaves = if flip { &moved } else { &boxes };
                tree.update_leaf_volumes(black_box(leaves)).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_volume_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume_query");
    for &n in &[64_u16, 128, 256] {
        let boxes = gen_grid_boxes(n, 10.0);
        let mut tree = BoundingVolumeTree::new(boxes.len());
        tree.construct(&boxes).unwrap();
        let probe = Aabb::from_coords(100.0, 100.0, 500.0, 500.0);
        let mut hits = Vec::new();
        group.bench_function(format!("grid_n{n}_window_400"), |b| {
            b.iter(|| {
                hits.clear();
                tree.intersections_with_volume(black_box(&probe), &mut hits)
                    .unwrap();
                black_box(hits.len());
            });
        });

        let view = tree.view();
        let mut queue = VecDeque::new();
        let point = Aabb::from_point(Vec2::new(255.0, 255.0));
        group.bench_function(format!("grid_n{n}_point_view"), |b| {
            b.iter(|| {
                hits.clear();
                view.intersections_with_volume(black_box(&point), &mut hits, &mut queue)
                    .unwrap();
                black_box(hits.len());
            });
        });
    }
    group.finish();
}

fn bench_tree_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_pairs");
    for &count in &[1_000_usize, 5_000] {
        let a = gen_random_boxes(count, 1000.0, 5.0, 0xAAAA);
        let b_boxes = gen_random_boxes(count, 1000.0, 5.0, 0xBBBB);
        let mut ta = BoundingVolumeTree::new(count);
        let mut tb = BoundingVolumeTree::new(count);
        ta.construct(&a).unwrap();
        tb.construct(&b_boxes).unwrap();

        let mut pairs = Vec::new();
        group.bench_function(format!("two_trees_{count}"), |b| {
            b.iter(|| {
                pairs.clear();
                ta.intersections_with_tree(black_box(&tb), &mut pairs);
                black_box(pairs.len());
            });
        });
        group.bench_function(format!("self_pairs_{count}"), |b| {
            b.iter(|| {
                pairs.clear();
                ta.intersections_with_tree(black_box(&ta), &mut pairs);
                black_box(pairs.len());
            });
        });
    }
    group.finish();
}

fn bench_accumulated_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulated_product");
    let ones = vec![1_i32; 1 << 20];
    let boxes = gen_random_boxes(1 << 18, 5000.0, 3.0, 0xB0B0);
    group.throughput(Throughput::Elements(ones.len() as u64));
    group.bench_function("sum_i32_1m", |b| {
        b.iter(|| {
            let mut sum = AccumulatedProduct::new(Sum);
            sum.accumulate_products(black_box(&ones));
            black_box(sum.combine());
        });
    });
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("aabb_union_256k", |b| {
        b.iter(|| {
            let mut bounds = AccumulatedProduct::new(AabbUnion);
            bounds.accumulate_products(black_box(&boxes));
            black_box(bounds.combine());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_construct,
    bench_refit,
    bench_volume_query,
    bench_tree_pairs,
    bench_accumulated_product
);
criterion_main!(benches);
