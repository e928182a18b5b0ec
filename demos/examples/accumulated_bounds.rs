// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel reductions.
//!
//! Compute the bounds of a large point cloud on all cores and check the result
//! against a tree root. Also sum and minimise a plain slice.
//!
//! Run:
//! - `cargo run -p canopy_demos --example accumulated_bounds`

use canopy_bvh::{Aabb, BoundingVolumeTree, Vec2};
use canopy_reduce::{AabbUnion, AccumulatedProduct, Min, Sum};

fn main() {
    let boxes: Vec<Aabb> = (0..4096_u16)
        .map(|i| {
            let p = Vec2::new(f32::from(i % 64), f32::from(i / 64)) * 4.0;
            Aabb::new(p, p + Vec2::ONE)
        })
        .collect();

    let mut bounds = AccumulatedProduct::new(AabbUnion);
    println!("workers: {}", bounds.workers());
    bounds.accumulate_products(&boxes);
    let total = bounds.combine();
    println!("bounds: {:?} .. {:?}", total.min, total.max);

    let mut tree = BoundingVolumeTree::new(boxes.len());
    tree.construct(&boxes).unwrap();
    assert_eq!(
        total,
        tree.volumes()[tree.root().unwrap()],
        "union of leaves should equal the root volume"
    );

    let values: Vec<i32> = (-500..500).collect();
    let mut sum = AccumulatedProduct::with_workers(Sum, 4);
    sum.accumulate_products(&values);
    let mut min = AccumulatedProduct::with_workers(Min, 4);
    min.accumulate_products(&values);
    println!("sum: {}, min: {}", sum.combine(), min.combine());
    assert_eq!(sum.value(), -500, "sum of -500..500");
    assert_eq!(min.value(), -500, "min of -500..500");
}
