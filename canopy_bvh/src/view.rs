// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of a constructed tree.

use alloc::collections::VecDeque;

use crate::bfs::Bfs;
use crate::error::TreeError;
use crate::node::{Node, NodeId};

/// Borrowed snapshot of a tree's nodes, volumes and root.
///
/// A view owns no scratch state; every traversal takes a caller-supplied queue.
/// Views are `Copy` and `Send + Sync` when the volume type is, so several threads
/// can query one tree at once, each with its own queue.
#[derive(Debug)]
pub struct TreeView<'a, V> {
    nodes: &'a [Node],
    volumes: &'a [V],
    root: Option<NodeId>,
    leaves_count: usize,
}

impl<V> Clone for TreeView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TreeView<'_, V> {}

impl<'a, V> TreeView<'a, V> {
    pub(crate) const fn new(
        nodes: &'a [Node],
        volumes: &'a [V],
        root: Option<NodeId>,
        leaves_count: usize,
    ) -> Self {
        Self {
            nodes,
            volumes,
            root,
            leaves_count,
        }
    }

    /// Root node, `None` when the tree is empty.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Whether the tree has no root.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves the tree was created for.
    pub const fn leaves_count(&self) -> usize {
        self.leaves_count
    }

    /// The node arena.
    pub const fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    /// Per-node volumes, indexed like [`nodes`](Self::nodes).
    pub const fn volumes(&self) -> &'a [V] {
        self.volumes
    }

    /// Start a breadth-first walk from the root using `queue` as scratch.
    ///
    /// Fails with [`TreeError::NotConstructed`] if the tree is empty.
    pub fn bfs<'q>(&self, queue: &'q mut VecDeque<NodeId>) -> Result<Bfs<'q, V>, TreeError>
    where
        'a: 'q,
    {
        let Some(root) = self.root else {
            tracing::debug!("query requested on an unconstructed tree");
            return Err(TreeError::NotConstructed);
        };
        Ok(Bfs::new(self.nodes, self.volumes, root, queue))
    }
}
