// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, incremental construction, refit.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::bfs::Bfs;
use crate::error::TreeError;
use crate::node::{Node, NodeId};
use crate::view::TreeView;
use crate::volume::BoundingVolume;

/// Binary bounding volume hierarchy over a fixed number of leaves.
///
/// The tree is sized once for `L` leaves and stores `2L - 1` nodes in a flat arena.
/// Leaf `i` is input volume `i`; internal nodes are allocated from index `L` upwards
/// as leaves are inserted. [`construct`](Self::construct) rebuilds the topology from
/// scratch, [`update_leaf_volumes`](Self::update_leaf_volumes) keeps the topology and
/// refits internal volumes to new leaf volumes.
///
/// The scratch queue and stack used by construction, refit and the owned-scratch
/// queries live inside the tree and are reused across calls. For concurrent
/// read-only queries, take a [`view`](Self::view) and give each caller its own queue.
pub struct BoundingVolumeTree<V: BoundingVolume> {
    pub(crate) leaves_count: usize,
    pub(crate) nodes: Vec<Node>,
    // Leaves first, then internal nodes in allocation order.
    pub(crate) volumes: Vec<V>,
    pub(crate) root: Option<NodeId>,
    internal_count: usize,
    pub(crate) queue: VecDeque<NodeId>,
    stack: Vec<NodeId>,
}

impl<V: BoundingVolume> core::fmt::Debug for BoundingVolumeTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundingVolumeTree")
            .field("leaves_count", &self.leaves_count)
            .field("nodes", &self.nodes.len())
            .field("internal_count", &self.internal_count)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<V: BoundingVolume> BoundingVolumeTree<V> {
    /// Create an empty tree for exactly `leaves_count` leaves.
    pub fn new(leaves_count: usize) -> Self {
        let length = (2 * leaves_count).saturating_sub(1);
        Self {
            leaves_count,
            nodes: vec![Node::EMPTY; length],
            volumes: Vec::with_capacity(length),
            root: None,
            internal_count: 0,
            queue: VecDeque::with_capacity(leaves_count),
            stack: Vec::with_capacity(leaves_count.saturating_sub(1)),
        }
    }

    /// Number of leaves the tree was created for.
    pub const fn leaves_count(&self) -> usize {
        self.leaves_count
    }

    /// Whether the tree has no root.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node, `None` when the tree is empty.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node arena (`2L - 1` entries).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Per-node volumes. Empty until the first successful construction.
    pub fn volumes(&self) -> &[V] {
        &self.volumes
    }

    /// Forget the current topology. The arena is kept for the next construction.
    pub fn clear(&mut self) {
        self.root = None;
        self.internal_count = 0;
    }

    /// Read-only view for queries with caller-supplied scratch.
    pub fn view(&self) -> TreeView<'_, V> {
        TreeView::new(&self.nodes, &self.volumes, self.root, self.leaves_count)
    }

    /// Breadth-first walk from the root using the tree's own scratch queue.
    pub fn bfs(&mut self) -> Result<Bfs<'_, V>, TreeError> {
        let Some(root) = self.root else {
            tracing::debug!("traversal requested on an unconstructed tree");
            return Err(TreeError::NotConstructed);
        };
        Ok(Bfs::new(&self.nodes, &self.volumes, root, &mut self.queue))
    }

    /// Build the tree from scratch by inserting `volumes` one after another.
    ///
    /// Each new leaf is paired with the existing node that minimizes the total growth
    /// of bounding volumes (its own union plus every enlarged ancestor).
    /// Fails without touching the tree if `volumes.len()` differs from the leaf count.
    pub fn construct(&mut self, volumes: &[V]) -> Result<(), TreeError> {
        self.check_length(volumes)?;
        self.clear();
        self.nodes.fill(Node::EMPTY);
        self.volumes.clear();

        if volumes.is_empty() {
            return Ok(());
        }

        // Leaf volumes are written up front; internal volumes are appended behind them.
        self.volumes.extend_from_slice(volumes);
        self.nodes[0] = Node::leaf(None);
        self.root = Some(0);

        for (object, volume) in volumes.iter().enumerate().skip(1) {
            let sibling = self.find_best_node(volume);
            self.insert_leaf(object, *volume, sibling);
        }

        tracing::debug!(
            leaves = self.leaves_count,
            internal = self.internal_count,
            "constructed bounding volume tree"
        );
        Ok(())
    }

    /// Replace every leaf volume and refit all internal volumes bottom-up.
    ///
    /// The topology is left as is, so the tree may become looser as leaves drift.
    /// Fails without touching the tree if it has not been constructed or if
    /// `volumes.len()` differs from the leaf count.
    pub fn update_leaf_volumes(&mut self, volumes: &[V]) -> Result<(), TreeError> {
        if self.root.is_none() {
            tracing::debug!("refit requested on an unconstructed tree");
            return Err(TreeError::NotConstructed);
        }
        self.check_length(volumes)?;

        self.volumes[..self.leaves_count].copy_from_slice(volumes);
        self.recalculate_volumes()
    }

    /// Recompute internal volumes from the current leaf volumes.
    ///
    /// Internal nodes are collected in BFS order onto the stack, so popping visits the
    /// deepest ones first and children are always final before their parent.
    fn recalculate_volumes(&mut self) -> Result<(), TreeError> {
        let root = self.root.ok_or(TreeError::NotConstructed)?;

        self.stack.clear();
        let mut bfs = Bfs::new(&self.nodes, &self.volumes, root, &mut self.queue);
        while let Some((id, _)) = bfs.next() {
            if !bfs.is_leaf(id) {
                self.stack.push(id);
            }
            bfs.traverse(id);
        }

        let refitted = self.stack.len();
        while let Some(id) = self.stack.pop() {
            if let Some((left, right)) = self.nodes[id].children() {
                self.volumes[id] = self.volumes[left].union(&self.volumes[right]);
            }
        }

        tracing::trace!(refitted, "refitted bounding volume tree");
        Ok(())
    }

    /// Pair leaf `object` with `sibling` under a freshly allocated internal node.
    fn insert_leaf(&mut self, object: NodeId, volume: V, sibling: NodeId) {
        let internal = self.leaves_count + self.internal_count;
        assert!(
            internal < self.nodes.len(),
            "internal node capacity exhausted: construction allocated more than L - 1 internal nodes"
        );
        debug_assert_eq!(
            self.volumes.len(),
            internal,
            "internal volumes must be allocated in node order"
        );

        let old_parent = self.nodes[sibling].parent;
        self.nodes[internal] = Node::new(old_parent, Some(sibling), Some(object));
        let merged = volume.union(&self.volumes[sibling]);
        self.volumes.push(merged);
        self.internal_count += 1;

        self.nodes[sibling].parent = Some(internal);

        match old_parent {
            None => self.root = Some(internal),
            Some(parent) => {
                let links = &mut self.nodes[parent];
                if links.left == Some(sibling) {
                    links.left = Some(internal);
                } else {
                    links.right = Some(internal);
                }
                self.refit_ancestors(parent);
            }
        }

        self.nodes[object] = Node::leaf(Some(internal));
        self.volumes[object] = volume;
    }

    /// Recompute `start` and every ancestor up to the root from their children.
    fn refit_ancestors(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let node = self.nodes[id];
            if let Some((left, right)) = node.children() {
                self.volumes[id] = self.volumes[left].union(&self.volumes[right]);
            }
            current = node.parent;
        }
    }

    /// Branch-and-bound search for the cheapest sibling of `volume`.
    ///
    /// Candidates are taken from a FIFO queue seeded with the root. A candidate's
    /// children are only queued while the lower bound of any pairing below it can
    /// still beat the best cost seen so far.
    fn find_best_node(&mut self, volume: &V) -> NodeId {
        let Some(root) = self.root else {
            unreachable!("sibling search requires a non-empty tree");
        };

        let mut best = root;
        let mut best_cost = f32::MAX;

        self.queue.clear();
        self.queue.push_back(root);
        while let Some(other) = self.queue.pop_front() {
            let other_volume = self.volumes[other];
            let direct_cost = volume.union(&other_volume).volume();
            if direct_cost >= best_cost {
                continue;
            }

            let inherited_cost = self.inherited_cost(volume, other);
            let cost = direct_cost + inherited_cost;
            if cost < best_cost {
                best_cost = cost;
                best = other;

                let lower_bound_cost =
                    volume.volume() + direct_cost - other_volume.volume() + inherited_cost;
                if lower_bound_cost < best_cost
                    && let Some((left, right)) = self.nodes[other].children()
                {
                    self.queue.push_back(left);
                    self.queue.push_back(right);
                }
            }
        }

        best
    }

    /// Growth of every ancestor of `id` if `volume` were inserted below it.
    fn inherited_cost(&self, volume: &V, id: NodeId) -> f32 {
        let mut cost = 0.0;
        let mut current = self.nodes[id].parent;
        while let Some(parent) = current {
            let parent_volume = &self.volumes[parent];
            cost += parent_volume.union(volume).volume() - parent_volume.volume();
            current = self.nodes[parent].parent;
        }
        cost
    }

    fn check_length(&self, volumes: &[V]) -> Result<(), TreeError> {
        if volumes.len() == self.leaves_count {
            return Ok(());
        }
        tracing::debug!(
            expected = self.leaves_count,
            actual = volumes.len(),
            "volumes length does not match tree leaves count"
        );
        Err(TreeError::LengthMismatch {
            expected: self.leaves_count,
            actual: volumes.len(),
        })
    }
}
