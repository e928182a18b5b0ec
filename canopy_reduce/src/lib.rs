// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_reduce --heading-base-level=0

//! Canopy Reduce: parallel reductions with per-worker accumulators.
//!
//! A reduction over a large slice is split into two steps:
//!
//! - Map: every worker folds its share of the input into a private slot.
//! - Reduce: the slots are folded together into one value.
//!
//! Because slots are never shared, the map step needs no synchronisation; the only
//! requirement is that the operation is an [`AbelianOperator`], so that any split
//! and any order give the same answer.
//!
//! Operators are provided for sums, minima and maxima of `i32`, `f32` and the glam
//! `IVec2`-`IVec4` / `Vec2`-`Vec4` vectors, and for the union of [`canopy_bvh::Aabb`]s.
//!
//! # Example
//!
//! ```rust
//! use canopy_bvh::Aabb;
//! use canopy_reduce::{AabbUnion, AccumulatedProduct};
//!
//! let boxes = [
//!     Aabb::from_coords(0.0, 0.0, 1.0, 1.0),
//!     Aabb::from_coords(-4.0, 2.0, -3.0, 3.0),
//!     Aabb::from_coords(5.0, -1.0, 6.0, 0.0),
//! ];
//! let mut bounds = AccumulatedProduct::new(AabbUnion);
//! bounds.accumulate_products(&boxes);
//! assert_eq!(bounds.combine(), Aabb::from_coords(-4.0, -1.0, 6.0, 3.0));
//! ```

pub mod operators;
pub mod product;

pub use operators::{AabbUnion, AbelianOperator, Max, Min, Sum};
pub use product::AccumulatedProduct;
