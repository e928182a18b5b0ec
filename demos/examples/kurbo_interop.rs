// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo interop.
//!
//! Feed Kurbo rectangles and circles into trees and get Kurbo shapes back out.
//!
//! Run:
//! - `cargo run -p canopy_demos --example kurbo_interop`

use canopy_bvh::{Aabb, BoundingVolumeTree, Mbc};
use kurbo::{Circle, Point, Rect, Shape};

fn main() {
    let widgets = [
        Rect::new(0.0, 0.0, 100.0, 40.0),
        Rect::new(0.0, 50.0, 100.0, 90.0),
        Rect::new(120.0, 0.0, 200.0, 90.0),
    ];
    let volumes: Vec<Aabb> = widgets.iter().copied().map(Aabb::from).collect();
    let mut tree = BoundingVolumeTree::new(volumes.len());
    tree.construct(&volumes).unwrap();

    let root = Rect::from(tree.volumes()[tree.root().unwrap()]);
    println!("root bounds: {root:?}");
    assert_eq!(root, Rect::new(0.0, 0.0, 200.0, 90.0), "root covers all widgets");

    // Hit-test a pointer position as a degenerate rectangle.
    let pointer = Point::new(50.0, 60.0);
    let mut hits = Vec::new();
    tree.intersections_with_volume(&Aabb::from(Rect::from_points(pointer, pointer)), &mut hits)
        .unwrap();
    println!("under pointer: {hits:?}");
    assert_eq!(hits, [1], "pointer is over the second widget");

    // Circles go through the same way.
    let blobs = [
        Circle::new((0.0, 0.0), 5.0),
        Circle::new((20.0, 0.0), 5.0),
    ];
    let mbcs: Vec<Mbc> = blobs.iter().copied().map(Mbc::from).collect();
    let mut circles = BoundingVolumeTree::new(mbcs.len());
    circles.construct(&mbcs).unwrap();
    let hull = Circle::from(circles.volumes()[circles.root().unwrap()]);
    println!("enclosing circle: {hull:?}, area {}", hull.area());
    assert_eq!(hull.center, Point::new(10.0, 0.0), "hull centered between blobs");
    assert_eq!(hull.radius, 15.0, "hull just reaches both blobs");
}
