// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle hierarchy.
//!
//! The tree works the same over minimum bounding circles: every internal node is
//! the smallest circle enclosing its two children.
//!
//! Run:
//! - `cargo run -p canopy_demos --example circles`

use canopy_bvh::{BoundingVolume, BoundingVolumeTree, Mbc, Vec2};

fn main() {
    let circles: Vec<Mbc> = (0..12_u8)
        .map(|i| {
            let angle = f32::from(i) * core::f32::consts::TAU / 12.0;
            Mbc::new(Vec2::from_angle(angle) * 10.0, 1.0)
        })
        .collect();

    let mut tree = BoundingVolumeTree::new(circles.len());
    tree.construct(&circles).unwrap();
    let root = tree.volumes()[tree.root().unwrap()];
    println!("root circle: center {:?}, radius {}", root.center, root.radius);

    // Every internal circle encloses its children (up to rounding).
    for (id, node) in tree.nodes().iter().enumerate() {
        if let Some((l, r)) = node.children() {
            let parent = tree.volumes()[id];
            for child in [tree.volumes()[l], tree.volumes()[r]] {
                let reach = parent.center.distance(child.center) + child.radius;
                assert!(reach <= parent.radius + 1e-3, "node {id} leaks a child");
            }
        }
    }

    let probe = Mbc::new(Vec2::new(10.0, 0.0), 0.5);
    let mut hits = Vec::new();
    tree.intersections_with_volume(&probe, &mut hits).unwrap();
    hits.sort_unstable();
    let expected: Vec<usize> = (0..circles.len())
        .filter(|&i| circles[i].intersects(&probe))
        .collect();
    println!("circles touching the probe: {hits:?}");
    assert_eq!(hits, expected, "query should match the brute force");
}
