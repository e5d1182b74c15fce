//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [run-started] len=100000
//! [spawned] unit=1 action=sort len=100000
//! [tick] n=1 len=100001
//! [terminated] unit=1
//! [progress] unit=2 len=100001
//! [ticks-exhausted] n=100
//! [completed] unit=101 action=sort len=100100
//! [timer] label=attempt elapsed=52ms
//! [run-completed] len=100100 elapsed=5210ms
//! [failed] unit=7 err="index out of bounds"
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

use super::Subscribe;

/// Stdout logging subscriber, enabled via the `logging` feature.
///
/// Intended for development and demos; implement a custom [`Subscribe`]
/// for structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::UnitSpawned => {
                println!(
                    "[spawned] unit={} action={} len={}",
                    e.generation.unwrap_or(0),
                    e.label.as_deref().unwrap_or("?"),
                    e.len.unwrap_or(0)
                );
            }
            EventKind::UnitTerminated => {
                println!("[terminated] unit={}", e.generation.unwrap_or(0));
            }
            EventKind::UnitCompleted => {
                println!(
                    "[completed] unit={} action={} len={}",
                    e.generation.unwrap_or(0),
                    e.label.as_deref().unwrap_or("?"),
                    e.len.unwrap_or(0)
                );
            }
            EventKind::UnitFailed => {
                println!(
                    "[failed] unit={} err={:?}",
                    e.generation.unwrap_or(0),
                    e.reason.as_deref().unwrap_or("unknown")
                );
            }
            EventKind::RunStarted => {
                println!("[run-started] len={}", e.len.unwrap_or(0));
            }
            EventKind::GrowthTick => {
                println!(
                    "[tick] n={} len={}",
                    e.tick.unwrap_or(0),
                    e.len.unwrap_or(0)
                );
            }
            EventKind::GrowthExhausted => {
                println!("[ticks-exhausted] n={}", e.tick.unwrap_or(0));
            }
            EventKind::SortProgress => {
                println!(
                    "[progress] unit={} len={}",
                    e.generation.unwrap_or(0),
                    e.len.unwrap_or(0)
                );
            }
            EventKind::RunCompleted => {
                println!(
                    "[run-completed] len={} elapsed={}ms",
                    e.len.unwrap_or(0),
                    e.elapsed_ms.unwrap_or(0)
                );
            }
            EventKind::TimerStopped => {
                println!(
                    "[timer] label={} elapsed={}ms",
                    e.label.as_deref().unwrap_or("?"),
                    e.elapsed_ms.unwrap_or(0)
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
