// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abelian operators: associative, commutative binary products with a neutral element.

use canopy_bvh::{Aabb, BoundingVolume, Vec2};
use glam::{IVec2, IVec3, IVec4, Vec3, Vec4};

/// An associative, commutative, pure binary operation on `T` with a neutral element.
///
/// Implementations must satisfy, for all `a`, `b`, `c`:
///
/// - `product(neutral(), a) == a`
/// - `product(a, b) == product(b, a)`
/// - `product(product(a, b), c) == product(a, product(b, c))`
///
/// Those laws are what allow [`AccumulatedProduct`](crate::AccumulatedProduct) to
/// split the input over workers in any order and still combine to one answer.
/// Floating-point sums only satisfy them up to rounding.
pub trait AbelianOperator<T>: Sync {
    /// The identity element of [`product`](Self::product).
    fn neutral(&self) -> T;
    /// Combine two elements.
    fn product(&self, a: T, b: T) -> T;
}

/// Addition. Integer sums wrap on overflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sum;

/// Minimum (component-wise for vectors).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Min;

/// Maximum (component-wise for vectors).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Max;

/// Union of axis-aligned boxes.
///
/// The neutral element is the inverted box `min = +MAX, max = -MAX`, which every
/// real box swallows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AabbUnion;

macro_rules! impl_int_ops {
    ($($t:ty => $zero:expr, $lo:expr, $hi:expr;)*) => {$(
        impl AbelianOperator<$t> for Sum {
            #[inline]
            fn neutral(&self) -> $t {
                $zero
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a.wrapping_add(b)
            }
        }

        impl AbelianOperator<$t> for Min {
            #[inline]
            fn neutral(&self) -> $t {
                $hi
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a.min(b)
            }
        }

        impl AbelianOperator<$t> for Max {
            #[inline]
            fn neutral(&self) -> $t {
                $lo
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a.max(b)
            }
        }
    )*};
}

macro_rules! impl_float_ops {
    ($($t:ty => $zero:expr, $lo:expr, $hi:expr;)*) => {$(
        impl AbelianOperator<$t> for Sum {
            #[inline]
            fn neutral(&self) -> $t {
                $zero
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a + b
            }
        }

        impl AbelianOperator<$t> for Min {
            #[inline]
            fn neutral(&self) -> $t {
                $hi
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a.min(b)
            }
        }

        impl AbelianOperator<$t> for Max {
            #[inline]
            fn neutral(&self) -> $t {
                $lo
            }
            #[inline]
            fn product(&self, a: $t, b: $t) -> $t {
                a.max(b)
            }
        }
    )*};
}

impl_int_ops! {
    i32 => 0, i32::MIN, i32::MAX;
    IVec2 => IVec2::ZERO, IVec2::MIN, IVec2::MAX;
    IVec3 => IVec3::ZERO, IVec3::MIN, IVec3::MAX;
    IVec4 => IVec4::ZERO, IVec4::MIN, IVec4::MAX;
}

impl_float_ops! {
    f32 => 0.0, f32::MIN, f32::MAX;
    Vec2 => Vec2::ZERO, Vec2::MIN, Vec2::MAX;
    Vec3 => Vec3::ZERO, Vec3::MIN, Vec3::MAX;
    Vec4 => Vec4::ZERO, Vec4::MIN, Vec4::MAX;
}

impl AbelianOperator<Aabb> for AabbUnion {
    #[inline]
    fn neutral(&self) -> Aabb {
        Aabb::new(Vec2::MAX, Vec2::MIN)
    }

    #[inline]
    fn product(&self, a: Aabb, b: Aabb) -> Aabb {
        a.union(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_is_identity<T, Op>(op: Op, value: T)
    where
        T: Copy + PartialEq + core::fmt::Debug,
        Op: AbelianOperator<T>,
    {
        assert_eq!(op.product(op.neutral(), value), value, "left identity");
        assert_eq!(op.product(value, op.neutral()), value, "right identity");
    }

    #[test]
    fn int_neutral_elements() {
        neutral_is_identity(Sum, 12_i32);
        neutral_is_identity(Min, 12_i32);
        neutral_is_identity(Max, 12_i32);
        neutral_is_identity(Sum, IVec2::splat(12));
        neutral_is_identity(Min, IVec3::splat(12));
        neutral_is_identity(Max, IVec4::splat(12));
        neutral_is_identity(Min, IVec2::new(i32::MIN, 12));
        neutral_is_identity(Max, IVec2::new(i32::MAX, -12));
    }

    #[test]
    fn float_neutral_elements() {
        neutral_is_identity(Sum, 12.0_f32);
        neutral_is_identity(Min, 12.0_f32);
        neutral_is_identity(Max, -12.0_f32);
        neutral_is_identity(Sum, Vec2::splat(12.0));
        neutral_is_identity(Min, Vec3::splat(12.0));
        neutral_is_identity(Max, Vec4::splat(12.0));
    }

    #[test]
    fn aabb_union_neutral_element() {
        neutral_is_identity(AabbUnion, Aabb::from_coords(1.0, 1.0, 2.0, 2.0));
        // A degenerate point box is still absorbed correctly.
        neutral_is_identity(AabbUnion, Aabb::from_point(Vec2::new(-3.0, 4.0)));
    }

    #[test]
    fn vector_min_max_are_component_wise() {
        let a = IVec2::new(1, 5);
        let b = IVec2::new(3, -2);
        assert_eq!(Min.product(a, b), IVec2::new(1, -2));
        assert_eq!(Max.product(a, b), IVec2::new(3, 5));
    }

    #[test]
    fn int_sum_wraps() {
        assert_eq!(Sum.product(i32::MAX, 1), i32::MIN);
    }
}
