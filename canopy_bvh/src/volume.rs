// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding volume trait implemented by [`Aabb`](crate::Aabb) and [`Mbc`](crate::Mbc).

/// A value that can measure itself, test overlap, and merge with another value of the same type.
///
/// The tree is generic over this trait, so any shape satisfying it can be indexed.
/// Implementations must be total for finite inputs: `volume` and `union` should never
/// produce NaN for well-formed volumes, since the sibling search compares costs.
pub trait BoundingVolume: Copy {
    /// Measure used as insertion cost (area for boxes, disc area for circles).
    fn volume(&self) -> f32;

    /// Smallest volume of this type enclosing both `self` and `other`.
    fn union(&self, other: &Self) -> Self;

    /// Whether the two volumes overlap. Touching counts as overlapping.
    fn intersects(&self, other: &Self) -> bool;
}
