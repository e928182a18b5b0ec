// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-versus-tree overlap pairs.
//!
//! Two groups of boxes (say, players and pickups) each get a tree; one paired
//! descent finds every overlapping `(player, pickup)` pair.
//!
//! Run:
//! - `cargo run -p canopy_demos --example tree_pairs`

use std::collections::VecDeque;

use canopy_bvh::{Aabb, BoundingVolume, BoundingVolumeTree};

fn main() {
    let players = [
        Aabb::from_coords(0.0, 0.0, 2.0, 2.0),
        Aabb::from_coords(10.0, 0.0, 12.0, 2.0),
        Aabb::from_coords(20.0, 20.0, 22.0, 22.0),
    ];
    let pickups = [
        Aabb::from_coords(1.5, 1.5, 2.5, 2.5),
        Aabb::from_coords(11.0, -1.0, 11.5, 0.5),
        Aabb::from_coords(30.0, 30.0, 31.0, 31.0),
        Aabb::from_coords(2.0, 0.0, 3.0, 1.0),
    ];

    let mut a = BoundingVolumeTree::new(players.len());
    let mut b = BoundingVolumeTree::new(pickups.len());
    a.construct(&players).unwrap();
    b.construct(&pickups).unwrap();

    let mut pairs = Vec::new();
    a.intersections_with_tree(&b, &mut pairs);
    pairs.sort_unstable();
    println!("player/pickup pairs: {pairs:?}");

    let mut expected = Vec::new();
    for (i, p) in players.iter().enumerate() {
        for (j, q) in pickups.iter().enumerate() {
            if p.intersects(q) {
                expected.push((i, j));
            }
        }
    }
    assert_eq!(pairs, expected, "paired descent should match the brute force");

    // Views with caller-owned scratch give the same answer and can run on any thread.
    let mut from_view = Vec::new();
    let mut queue = VecDeque::new();
    let (va, vb) = (a.view(), b.view());
    std::thread::scope(|s| {
        s.spawn(|| va.intersections_with_tree(&vb, &mut from_view, &mut queue));
    });
    from_view.sort_unstable();
    assert_eq!(from_view, pairs, "view query should match the owned query");
}
