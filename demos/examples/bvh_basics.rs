// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree basics.
//!
//! Build a tree over four boxes, walk it breadth-first, and query a window.
//!
//! Run:
//! - `cargo run -p canopy_demos --example bvh_basics`

use canopy_bvh::{Aabb, BoundingVolumeTree};

fn main() {
    let leaves = [
        Aabb::from_coords(0.0, 0.0, 1.0, 1.0),
        Aabb::from_coords(1.5, 0.0, 2.5, 1.0),
        Aabb::from_coords(10.0, 10.0, 11.0, 11.0),
        Aabb::from_coords(11.5, 10.0, 12.5, 11.0),
    ];
    let mut tree = BoundingVolumeTree::new(leaves.len());
    tree.construct(&leaves).unwrap();

    // Walk the whole hierarchy, printing every node.
    let mut bfs = tree.bfs().unwrap();
    while let Some((id, volume)) = bfs.next() {
        let kind = if bfs.is_leaf(id) { "leaf" } else { "node" };
        println!("{kind} {id}: {:?} .. {:?}", volume.min, volume.max);
        bfs.traverse(id);
    }

    // The two near-origin boxes are the only hits.
    let mut hits = Vec::new();
    tree.intersections_with_volume(&Aabb::from_coords(0.5, 0.5, 2.0, 0.5), &mut hits)
        .unwrap();
    hits.sort_unstable();
    println!("window hits: {hits:?}");
    assert_eq!(hits, [0, 1], "window should hit the two boxes near the origin");

    // Nothing out there.
    hits.clear();
    tree.intersections_with_volume(&Aabb::from_coords(5.0, 5.0, 6.0, 6.0), &mut hits)
        .unwrap();
    assert!(hits.is_empty(), "gap between the clusters should be empty");
}
