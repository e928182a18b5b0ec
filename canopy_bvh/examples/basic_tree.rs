// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Canopy BVH: construct, query, refit, query again.

use canopy_bvh::{Aabb, BoundingVolumeTree, Vec2};

fn main() {
    let mut leaves = vec![
        Aabb::from_coords(0.0, 0.0, 10.0, 10.0),
        Aabb::from_coords(5.0, 5.0, 15.0, 15.0),
        Aabb::from_coords(40.0, 0.0, 50.0, 10.0),
    ];
    let mut tree = BoundingVolumeTree::new(leaves.len());
    tree.construct(&leaves).unwrap();
    println!("root: {:?}, nodes: {:?}", tree.root(), tree.nodes());

    let probe = Aabb::from_point(Vec2::new(6.0, 6.0));
    let mut hits = Vec::new();
    tree.intersections_with_volume(&probe, &mut hits).unwrap();
    println!("hits at (6,6): {hits:?}");

    // Move box 2 onto the probe
    leaves[2] = leaves[2].translate(Vec2::new(-38.0, 0.0));
    tree.update_leaf_volumes(&leaves).unwrap();
    hits.clear();
    tree.intersections_with_volume(&probe, &mut hits).unwrap();
    println!("hits at (6,6) after refit: {hits:?}");
}
