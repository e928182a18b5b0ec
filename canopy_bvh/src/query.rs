// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap queries: tree against a single volume, and tree against tree.
//!
//! Both searches are breadth-first and prune every subtree whose bounding volume
//! misses the query. Results are appended to caller-owned buffers in discovery
//! order; buffers are never cleared here, so clear them between calls if reused.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::error::TreeError;
use crate::node::NodeId;
use crate::tree::BoundingVolumeTree;
use crate::view::TreeView;
use crate::volume::BoundingVolume;

impl<V: BoundingVolume> TreeView<'_, V> {
    /// Append the ids of all leaves whose volume intersects `volume`.
    ///
    /// `queue` is scratch space; it is cleared on entry. Each leaf is reported at most
    /// once. Fails with [`TreeError::NotConstructed`] if the tree is empty.
    pub fn intersections_with_volume(
        &self,
        volume: &V,
        result: &mut Vec<NodeId>,
        queue: &mut VecDeque<NodeId>,
    ) -> Result<(), TreeError> {
        let mut bfs = self.bfs(queue)?;
        while let Some((id, node_volume)) = bfs.next() {
            if !volume.intersects(node_volume) {
                continue;
            }
            if bfs.is_leaf(id) {
                result.push(id);
            }
            bfs.traverse(id);
        }
        Ok(())
    }

    /// Append every pair `(a, b)` of a leaf `a` of this tree and a leaf `b` of `other`
    /// whose volumes intersect.
    ///
    /// Both trees are descended together from their roots. `queue` is scratch space;
    /// it is cleared on entry. Does nothing if either tree is empty.
    pub fn intersections_with_tree(
        &self,
        other: &TreeView<'_, V>,
        result: &mut Vec<(NodeId, NodeId)>,
        queue: &mut VecDeque<(NodeId, NodeId)>,
    ) {
        let (Some(root_a), Some(root_b)) = (self.root(), other.root()) else {
            return;
        };
        let (nodes_a, volumes_a) = (self.nodes(), self.volumes());
        let (nodes_b, volumes_b) = (other.nodes(), other.volumes());

        queue.clear();
        queue.push_back((root_a, root_b));
        while let Some((a, b)) = queue.pop_front() {
            if !volumes_a[a].intersects(&volumes_b[b]) {
                continue;
            }
            match (nodes_a[a].children(), nodes_b[b].children()) {
                (None, None) => result.push((a, b)),
                (Some((a_left, a_right)), Some((b_left, b_right))) => {
                    queue.push_back((a_left, b_left));
                    queue.push_back((a_left, b_right));
                    queue.push_back((a_right, b_left));
                    queue.push_back((a_right, b_right));
                }
                (None, Some((b_left, b_right))) => {
                    queue.push_back((a, b_left));
                    queue.push_back((a, b_right));
                }
                (Some((a_left, a_right)), None) => {
                    queue.push_back((a_left, b));
                    queue.push_back((a_right, b));
                }
            }
        }
    }
}

impl<V: BoundingVolume> BoundingVolumeTree<V> {
    /// Append the ids of all leaves whose volume intersects `volume`.
    ///
    /// Uses the tree's own scratch queue; see [`TreeView::intersections_with_volume`]
    /// for the variant that can run concurrently on a shared tree.
    ///
    /// ```rust
    /// use canopy_bvh::{Aabb, BoundingVolumeTree};
    ///
    /// let leaves = [
    ///     Aabb::from_coords(0.0, 0.0, 1.0, 1.0),
    ///     Aabb::from_coords(1.0, 1.0, 2.0, 2.0),
    ///     Aabb::from_coords(5.0, 0.0, 6.0, 1.0),
    /// ];
    /// let mut tree = BoundingVolumeTree::new(leaves.len());
    /// tree.construct(&leaves).unwrap();
    ///
    /// let mut hits = Vec::new();
    /// tree.intersections_with_volume(&Aabb::from_coords(0.5, 0.5, 1.5, 1.5), &mut hits)
    ///     .unwrap();
    /// hits.sort_unstable();
    /// assert_eq!(hits, [0, 1]);
    /// ```
    pub fn intersections_with_volume(
        &mut self,
        volume: &V,
        result: &mut Vec<NodeId>,
    ) -> Result<(), TreeError> {
        let view = TreeView::new(&self.nodes, &self.volumes, self.root, self.leaves_count);
        view.intersections_with_volume(volume, result, &mut self.queue)
    }

    /// Append every intersecting pair `(leaf of self, leaf of other)`.
    ///
    /// Allocates a temporary pair queue; use [`TreeView::intersections_with_tree`] to
    /// supply and reuse one.
    pub fn intersections_with_tree(&self, other: &Self, result: &mut Vec<(NodeId, NodeId)>) {
        let mut queue = VecDeque::new();
        self.view()
            .intersections_with_tree(&other.view(), result, &mut queue);
    }
}
