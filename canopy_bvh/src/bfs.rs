// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first traversal with caller-controlled descent.

use alloc::collections::VecDeque;

use crate::node::{Node, NodeId};

/// Breadth-first walk over a tree, starting at the root.
///
/// Iterating yields `(id, volume)` for each dequeued node. Children are *not* queued
/// automatically: call [`Bfs::traverse`] with the visited id to descend into it.
/// Skipping that call prunes the whole subtree, which is how queries cut off
/// non-overlapping branches.
///
/// ```rust
/// use canopy_bvh::{Aabb, BoundingVolumeTree};
///
/// let leaves = [
///     Aabb::from_coords(0.0, 0.0, 1.0, 1.0),
///     Aabb::from_coords(4.0, 0.0, 5.0, 1.0),
///     Aabb::from_coords(8.0, 0.0, 9.0, 1.0),
/// ];
/// let mut tree = BoundingVolumeTree::new(leaves.len());
/// tree.construct(&leaves).unwrap();
///
/// let mut bfs = tree.bfs().unwrap();
/// let mut visited = 0;
/// while let Some((id, _volume)) = bfs.next() {
///     visited += 1;
///     bfs.traverse(id);
/// }
/// assert_eq!(visited, 2 * leaves.len() - 1);
/// ```
///
/// The walk borrows a scratch queue: the tree's own one via
/// [`BoundingVolumeTree::bfs`](crate::BoundingVolumeTree::bfs), or a caller-supplied
/// one via [`TreeView::bfs`](crate::TreeView::bfs).
pub struct Bfs<'a, V> {
    nodes: &'a [Node],
    volumes: &'a [V],
    queue: &'a mut VecDeque<NodeId>,
}

impl<'a, V> Bfs<'a, V> {
    /// Reset `queue` and seed it with `root`.
    pub(crate) fn new(
        nodes: &'a [Node],
        volumes: &'a [V],
        root: NodeId,
        queue: &'a mut VecDeque<NodeId>,
    ) -> Self {
        queue.clear();
        queue.push_back(root);
        Self {
            nodes,
            volumes,
            queue,
        }
    }

    /// Whether `id` is a leaf.
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].is_leaf()
    }

    /// Queue the children of `id`, if any, for a later visit.
    #[inline]
    pub fn traverse(&mut self, id: NodeId) {
        if let Some((left, right)) = self.nodes[id].children() {
            self.queue.push_back(left);
            self.queue.push_back(right);
        }
    }
}

impl<'a, V> Iterator for Bfs<'a, V> {
    type Item = (NodeId, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let volumes: &'a [V] = self.volumes;
        Some((id, &volumes[id]))
    }
}

impl<V> core::fmt::Debug for Bfs<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bfs")
            .field("nodes", &self.nodes.len())
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}
