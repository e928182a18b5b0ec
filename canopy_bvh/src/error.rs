// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the tree's call boundary.

use thiserror::Error;

/// Contract failures of tree operations.
///
/// Every operation validates its inputs before touching tree state, so an error
/// always leaves the tree exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The number of supplied volumes differs from the tree's leaf count.
    #[error("tree leaves count ({expected}) does not match the provided volumes length ({actual})")]
    LengthMismatch {
        /// Leaf count the tree was created with.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
    /// The tree has no root: it was never constructed, was cleared, or has zero leaves.
    #[error("bounding volume tree has not been constructed")]
    NotConstructed,
}
