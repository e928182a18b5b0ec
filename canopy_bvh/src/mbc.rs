// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum bounding circle.

use core::f32::consts::PI;

use glam::Vec2;

use crate::volume::BoundingVolume;

/// Minimum bounding circle: a disc given by its center and radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mbc {
    /// Center of the disc.
    pub center: Vec2,
    /// Radius of the disc. Expected to be non-negative.
    pub radius: f32,
}

impl Mbc {
    /// Create a new circle.
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl BoundingVolume for Mbc {
    #[inline]
    fn volume(&self) -> f32 {
        PI * self.radius * self.radius
    }

    /// Smallest circle enclosing both circles.
    ///
    /// When one circle lies inside the other (including two coincident circles) the
    /// larger one is returned unchanged.
    fn union(&self, other: &Self) -> Self {
        let d = self.center.distance(other.center);
        let dr = self.radius - other.radius;
        // `d == 0` always lands here, so the division below never sees zero.
        if d <= dr.max(-dr) {
            return if self.radius > other.radius {
                *self
            } else {
                *other
            };
        }

        let theta = 0.5 + dr / (2.0 * d);
        let center = (1.0 - theta) * other.center + theta * self.center;
        let radius = 0.5 * (self.radius + other.radius + d);
        Self { center, radius }
    }

    #[inline]
    fn intersects(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_squared(other.center) <= r * r
    }
}
