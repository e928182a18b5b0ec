// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo shapes (`kurbo` feature).
//!
//! Kurbo works in `f64`; volumes are `f32`, so converting into a volume rounds to the
//! nearest representable value. Converting back is exact.

use glam::Vec2;
use kurbo::{Circle, Point, Rect};

use crate::aabb::Aabb;
use crate::mbc::Mbc;

#[allow(
    clippy::cast_possible_truncation,
    reason = "Volumes store f32 coordinates."
)]
fn narrow(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn widen(v: Vec2) -> Point {
    Point::new(f64::from(v.x), f64::from(v.y))
}

impl From<Rect> for Aabb {
    /// Rectangles with flipped corners are normalized first.
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(narrow(rect.origin()), narrow(Point::new(rect.x1, rect.y1)))
    }
}

impl From<Aabb> for Rect {
    fn from(aabb: Aabb) -> Self {
        Self::from_points(widen(aabb.min), widen(aabb.max))
    }
}

impl From<Circle> for Mbc {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Volumes store f32 radii."
    )]
    fn from(circle: Circle) -> Self {
        Self::new(narrow(circle.center), circle.radius as f32)
    }
}

impl From<Mbc> for Circle {
    fn from(mbc: Mbc) -> Self {
        Self::new(widen(mbc.center), f64::from(mbc.radius))
    }
}
