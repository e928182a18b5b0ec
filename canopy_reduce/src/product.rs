// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-worker accumulation of an abelian product.

use std::num::NonZeroUsize;
use std::thread;

use crate::operators::AbelianOperator;

/// Map-reduce accumulator for an [`AbelianOperator`].
///
/// Each worker owns one slot, initialised to the operator's neutral element.
/// Workers fold elements into their own slot with [`accumulate`](Self::accumulate)
/// (no sharing, no locks); [`combine`](Self::combine) then folds every slot into
/// the final [`value`](Self::value). [`accumulate_products`](Self::accumulate_products)
/// does both halves of the map step itself, splitting a slice across scoped threads.
///
/// ```rust
/// use canopy_reduce::{AccumulatedProduct, Sum};
///
/// let data = vec![1_i32; 10_000];
/// let mut sum = AccumulatedProduct::with_workers(Sum, 4);
/// sum.accumulate_products(&data);
/// assert_eq!(sum.combine(), 10_000);
/// ```
#[derive(Clone, Debug)]
pub struct AccumulatedProduct<T, Op> {
    op: Op,
    slots: Vec<T>,
    value: T,
}

impl<T, Op> AccumulatedProduct<T, Op>
where
    T: Copy + Send + Sync,
    Op: AbelianOperator<T>,
{
    /// Create an accumulator with one slot per available hardware thread.
    pub fn new(op: Op) -> Self {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self::with_workers(op, workers)
    }

    /// Create an accumulator with `workers` slots.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is 0.
    pub fn with_workers(op: Op, workers: usize) -> Self {
        assert!(workers > 0, "accumulated product needs at least one worker slot");
        let neutral = op.neutral();
        Self {
            op,
            slots: vec![neutral; workers],
            value: neutral,
        }
    }

    /// Number of worker slots.
    pub fn workers(&self) -> usize {
        self.slots.len()
    }

    /// The operator in use.
    pub fn operator(&self) -> &Op {
        &self.op
    }

    /// Result of the last [`combine`](Self::combine), or the neutral element before any.
    pub fn value(&self) -> T {
        self.value
    }

    /// Fold `element` into the slot of `worker`.
    ///
    /// # Panics
    ///
    /// Panics if `worker >= self.workers()`.
    #[inline]
    pub fn accumulate(&mut self, worker: usize, element: T) {
        let slot = &mut self.slots[worker];
        *slot = self.op.product(*slot, element);
    }

    /// Fold every element of `data` into the worker slots, in parallel.
    ///
    /// `data` is cut into at most [`workers`](Self::workers) contiguous chunks and each
    /// chunk is folded on its own scoped thread into its own slot. Slots keep what they
    /// held before, so repeated calls keep accumulating until [`reset`](Self::reset).
    pub fn accumulate_products(&mut self, data: &[T]) {
        if data.is_empty() {
            return;
        }
        let chunk = data.len().div_ceil(self.slots.len());
        tracing::trace!(
            elements = data.len(),
            workers = self.slots.len(),
            chunk,
            "accumulating products"
        );

        let op = &self.op;
        if chunk == data.len() {
            let slot = &mut self.slots[0];
            *slot = fold(op, *slot, data);
            return;
        }

        thread::scope(|s| {
            let handles: Vec<_> = self
                .slots
                .iter_mut()
                .zip(data.chunks(chunk))
                .map(|(slot, part)| s.spawn(move || *slot = fold(op, *slot, part)))
                .collect();

            for handle in handles {
                if let Err(e) = handle.join() {
                    std::panic::resume_unwind(e);
                }
            }
        });
    }

    /// Fold all worker slots into the final value, store it and return it.
    pub fn combine(&mut self) -> T {
        self.value = fold(&self.op, self.op.neutral(), &self.slots);
        tracing::trace!(workers = self.slots.len(), "combined worker slots");
        self.value
    }

    /// Reset every worker slot to the neutral element. The last combined value is kept.
    pub fn reset(&mut self) {
        let neutral = self.op.neutral();
        self.slots.fill(neutral);
    }
}

fn fold<T: Copy, Op: AbelianOperator<T>>(op: &Op, init: T, data: &[T]) -> T {
    data.iter().fold(init, |acc, &e| op.product(acc, e))
}
