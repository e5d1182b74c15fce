//! # Sort engine: in-place partition-exchange sort with progress snapshots.
//!
//! The engine is synchronous and single-purpose; it runs inside an isolated
//! unit and reports progress through a caller-supplied sink. Cancellation is
//! cooperative, observed at snapshot boundaries.

mod sort;

pub use sort::{Cancelled, SortRun, SNAPSHOT_EVERY};
