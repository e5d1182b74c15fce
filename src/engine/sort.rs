//! # One sort attempt over one dataset.
//!
//! Recursive Hoare-style partition-exchange sort with a fixed middle-index
//! pivot. The pivot rule is part of the contract: swap counts, and
//! therefore the snapshot cadence, are observable, so it must not be
//! replaced with a randomized or median-of-three rule. Quadratic behavior
//! on adversarial inputs is a property of the fixed rule, not a defect.
//!
//! ## Progress and cancellation
//! A [`SortRun`] owns a per-run swap counter (never shared between tasks).
//! Every [`SNAPSHOT_EVERY`] swaps it resets the window, checks its
//! cancellation token, and hands the sink a **copy** of the array; the run
//! keeps mutating its own storage immediately afterwards, so the receiver
//! must never alias it. A cancelled run stops at the boundary and emits
//! nothing further.

use tokio_util::sync::CancellationToken;

/// Number of swaps between progress snapshots.
pub const SNAPSHOT_EVERY: u32 = 1000;

/// Returned when a run observes its cancellation token and stops early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// One sort attempt: swap counter, snapshot cadence, and progress sink.
pub struct SortRun<F> {
    ctx: CancellationToken,
    emit: F,
    every: u32,
    window: u32,
    swaps: u64,
}

impl<F: FnMut(&[u32])> SortRun<F> {
    /// Creates a run with the production cadence of [`SNAPSHOT_EVERY`].
    pub fn new(ctx: CancellationToken, emit: F) -> Self {
        Self::with_cadence(SNAPSHOT_EVERY, ctx, emit)
    }

    /// Creates a run with an explicit snapshot cadence (clamped to >= 1).
    pub fn with_cadence(every: u32, ctx: CancellationToken, emit: F) -> Self {
        Self {
            ctx,
            emit,
            every: every.max(1),
            window: 0,
            swaps: 0,
        }
    }

    /// Sorts `items` in place and returns the total number of swaps.
    ///
    /// Emits `floor(swaps / cadence)` snapshots along the way. Returns
    /// `Err(Cancelled)` if the token was observed set at a snapshot
    /// boundary; the array is then partially ordered and must be discarded
    /// by the caller.
    pub fn sort(mut self, items: &mut [u32]) -> Result<u64, Cancelled> {
        if items.len() > 1 {
            self.quick_sort(items, 0, items.len() as isize - 1)?;
        }
        Ok(self.swaps)
    }

    fn quick_sort(&mut self, items: &mut [u32], left: isize, right: isize) -> Result<(), Cancelled> {
        if right > left {
            let split = self.partition(items, left, right)?;
            if left < split - 1 {
                self.quick_sort(items, left, split - 1)?;
            }
            if split < right {
                self.quick_sort(items, split, right)?;
            }
        }
        Ok(())
    }

    /// Hoare partition around the middle element.
    ///
    /// Returns the final left-cursor position; the caller recurses on
    /// `[left, split-1]` and `[split, right]`. Duplicates take the same
    /// strict `<`/`>` comparisons as everything else.
    fn partition(&mut self, items: &mut [u32], left: isize, right: isize) -> Result<isize, Cancelled> {
        let pivot = items[((left + right) / 2) as usize];
        let mut i = left;
        let mut j = right;
        while i <= j {
            while items[i as usize] < pivot {
                i += 1;
            }
            while items[j as usize] > pivot {
                j -= 1;
            }
            if i <= j {
                items.swap(i as usize, j as usize);
                self.on_swap(items)?;
                i += 1;
                j -= 1;
            }
        }
        Ok(i)
    }

    fn on_swap(&mut self, items: &[u32]) -> Result<(), Cancelled> {
        self.swaps += 1;
        self.window += 1;
        if self.window == self.every {
            self.window = 0;
            if self.ctx.is_cancelled() {
                return Err(Cancelled);
            }
            (self.emit)(items);
        }
        Ok(())
    }
}
