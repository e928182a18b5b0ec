// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refit after motion.
//!
//! Build once, then move the leaves every frame and refit instead of rebuilding.
//! The topology stays fixed, so a refit is a single bottom-up pass.
//!
//! Run:
//! - `cargo run -p canopy_demos --example bvh_refit`

use canopy_bvh::{Aabb, BoundingVolumeTree, Vec2};

fn main() {
    // A column of boxes falling at different speeds.
    let mut leaves: Vec<Aabb> = (0..8_u8)
        .map(|i| {
            let x = f32::from(i) * 3.0;
            Aabb::from_coords(x, 20.0, x + 2.0, 22.0)
        })
        .collect();
    let speeds: Vec<f32> = (1..=8_u8).map(f32::from).collect();
    let ground = Aabb::from_coords(-100.0, -1000.0, 100.0, 0.0);

    let mut tree = BoundingVolumeTree::new(leaves.len());
    tree.construct(&leaves).unwrap();
    let topology = tree.nodes().to_vec();

    let mut hits = Vec::new();
    for frame in 0..5 {
        for (leaf, speed) in leaves.iter_mut().zip(&speeds) {
            *leaf = leaf.translate(Vec2::new(0.0, -speed));
        }
        tree.update_leaf_volumes(&leaves).unwrap();

        hits.clear();
        tree.intersections_with_volume(&ground, &mut hits).unwrap();
        hits.sort_unstable();
        println!("frame {frame}: reached the ground {hits:?}");
    }

    assert_eq!(tree.nodes(), &topology[..], "refit keeps the topology");
    // After five frames a box has dropped 5 * speed; it touches once its bottom is <= 0.
    assert_eq!(hits, [3, 4, 5, 6, 7], "boxes with speed >= 4 reached the ground");
}
