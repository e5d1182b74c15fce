//! Final figures delivered when a run completes.

/// Outcome of one completed scheduler run.
#[derive(Debug)]
pub struct SortReport {
    /// The fully sorted dataset.
    pub items: Vec<u32>,
    /// Wall-clock milliseconds for the whole run.
    pub total_ms: u64,
    /// Milliseconds the final (uncancelled) sort attempt took.
    pub final_sort_ms: u64,
    /// Growth ticks that fired during the run.
    pub ticks: u32,
    /// Average milliseconds between attempt starts, over all ticks.
    ///
    /// Bookkeeping for insertion overhead; zero when no tick fired.
    pub avg_regrow_ms: u64,
}
