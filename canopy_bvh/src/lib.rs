// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_bvh --heading-base-level=0

//! Canopy BVH: a dynamic bounding volume hierarchy over 2D boxes and circles.
//!
//! Canopy BVH is a broad-phase building block for overlap queries.
//!
//! - Build a binary tree over a fixed set of leaf volumes, one insertion at a time.
//! - Refit internal volumes after leaves move, keeping the topology.
//! - Query every leaf overlapping a probe volume, or every overlapping leaf pair
//!   between two trees.
//!
//! The tree is generic over the [`BoundingVolume`] trait. Two volumes ship with the
//! crate: [`Aabb`] (axis-aligned box) and [`Mbc`] (minimum bounding circle), both in
//! `f32` on top of [`glam::Vec2`].
//!
//! Storage is a flat arena sized for exactly `2L - 1` nodes: leaf `i` is input volume
//! `i`, internal nodes follow. Nodes refer to each other by index.
//!
//! # Example
//!
//! ```rust
//! use canopy_bvh::{Aabb, BoundingVolumeTree};
//!
//! let leaves = [
//!     Aabb::from_coords(0.0, 0.0, 1.0, 1.0),
//!     Aabb::from_coords(2.0, 0.0, 3.0, 1.0),
//!     Aabb::from_coords(10.0, 10.0, 11.0, 11.0),
//! ];
//! let mut tree = BoundingVolumeTree::new(leaves.len());
//! tree.construct(&leaves).unwrap();
//!
//! let mut hits = Vec::new();
//! tree.intersections_with_volume(&Aabb::from_coords(0.5, 0.5, 2.5, 0.5), &mut hits)
//!     .unwrap();
//! hits.sort_unstable();
//! assert_eq!(hits, [0, 1]);
//!
//! // Move the far box next to the others and refit.
//! let moved = [leaves[0], leaves[1], Aabb::from_coords(1.0, 0.5, 2.0, 1.5)];
//! tree.update_leaf_volumes(&moved).unwrap();
//! hits.clear();
//! tree.intersections_with_volume(&Aabb::from_coords(1.5, 1.2, 1.6, 1.3), &mut hits)
//!     .unwrap();
//! assert_eq!(hits, [2]);
//! ```
//!
//! Queries that must run concurrently take a [`TreeView`] and a caller-owned queue
//! instead of the tree's internal scratch.
//!
//! ## Features
//!
//! - `std` (default): use the standard library float backend.
//! - `libm`: float math via `libm` for `no_std` targets.
//! - `kurbo`: `From` conversions between [`Aabb`]/[`Mbc`] and Kurbo's `Rect`/`Circle`.
//!
//! ### Float semantics
//!
//! Coordinates are assumed to be finite. Overlap and containment tests are inclusive:
//! touching volumes intersect.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aabb;
pub mod bfs;
pub mod error;
#[cfg(feature = "kurbo")]
pub mod interop;
pub mod mbc;
pub mod node;
pub mod query;
pub mod tree;
pub mod view;
pub mod volume;

pub use aabb::Aabb;
pub use bfs::Bfs;
pub use error::TreeError;
pub use glam::Vec2;
pub use mbc::Mbc;
pub use node::{Node, NodeId};
pub use tree::BoundingVolumeTree;
pub use view::TreeView;
pub use volume::BoundingVolume;
