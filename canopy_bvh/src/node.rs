// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: parent and child links into the node arena.

/// Index of a node in the tree's arena.
///
/// Leaves occupy `0..L` and share their index with the input volume they were built
/// from; internal nodes occupy `L..2L-1` in allocation order.
pub type NodeId = usize;

/// Links of a single node. Volumes are stored separately, at the same index.
///
/// A node is a leaf iff it has no children, and the root iff it has no parent.
/// Internal nodes always have both children.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node {
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Left child. For nodes created by insertion this is the pre-existing sibling.
    pub left: Option<NodeId>,
    /// Right child. For nodes created by insertion this is the newly inserted leaf.
    pub right: Option<NodeId>,
}

impl Node {
    /// A node with no links.
    pub const EMPTY: Self = Self {
        parent: None,
        left: None,
        right: None,
    };

    /// Create a node from its links.
    pub const fn new(parent: Option<NodeId>, left: Option<NodeId>, right: Option<NodeId>) -> Self {
        Self {
            parent,
            left,
            right,
        }
    }

    /// A leaf attached to `parent`.
    pub const fn leaf(parent: Option<NodeId>) -> Self {
        Self::new(parent, None, None)
    }

    /// Whether the node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether the node has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Both children of an internal node, `None` for a leaf.
    #[inline]
    pub const fn children(&self) -> Option<(NodeId, NodeId)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}
