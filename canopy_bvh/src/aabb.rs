// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding box in 2D.

use glam::Vec2;

use crate::volume::BoundingVolume;

/// Axis-aligned bounding box defined by its min and max corners.
///
/// Boxes are closed: a box contains its boundary, and two boxes sharing an edge or
/// a corner intersect. A box with `min == max` is a valid degenerate point box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Aabb {
    /// Create a new AABB from min/max corners.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create an AABB from its four coordinates.
    pub const fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// A zero-area box located at `point`.
    pub const fn from_point(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec2 {
        self.min + 0.5 * self.size()
    }

    /// Whether `point` lies inside the box or on its boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        self.min.x <= point.x && self.min.y <= point.y && point.x <= self.max.x && point.y <= self.max.y
    }

    /// The box moved by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y
    }

    #[inline]
    fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    fn intersects(&self, other: &Self) -> bool {
        self.max.x >= other.min.x
            && self.max.y >= other.min.y
            && self.min.x <= other.max.x
            && self.min.y <= other.max.y
    }
}
