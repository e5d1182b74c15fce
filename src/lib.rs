//! # growsort
//!
//! **growsort** is a cancellable, out-of-line sort engine over an
//! incrementally growing dataset.
//!
//! A dataset is generated and handed to an isolated background unit that
//! sorts it in place while reporting rate-limited progress snapshots.
//! While the sort is still running, a scheduler may grow the dataset and
//! force a restart, repeatedly, on a timer, up to a bounded number of
//! times. At most one sort computation is ever live; a superseded unit's
//! output is never observed.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  GrowthScheduler (single-threaded control loop)
//!  ├─ owns the best-known dataset (latest snapshot, or the original)
//!  ├─ owns the Timers (whole run + per attempt)
//!  │
//!  │            run_sort / run_init / run_grow
//!  ▼
//!  WorkerSupervisor (single-flight slot)
//!  ├─ terminate previous handle  ──► cancel token + drop channel
//!  └─ spawn replacement          ──► WorkerHandle { generation, token, rx }
//!                                           │
//!                                           ▼
//!                               isolated unit (dedicated OS thread)
//!                               └─ SortRun: Hoare quicksort,
//!                                  snapshot copy every 1000 swaps
//!                                           │
//!            sort-tick (0..n), sort (1)     │  owned values, never aliased
//!  ◄────────────────────────────────────────┘
//!
//!  Bus (broadcast) ──► SubscriberSet ──► LogWriter / custom Subscribe
//! ```
//!
//! ### Lifecycle
//! ```text
//! run():
//!   ├─► create(size) ─► run_sort ─► Running
//!   ├─► every interval (≤ max_ticks times):
//!   │       grow(best, 1) ─► run_sort     (supersedes the live attempt)
//!   │       last tick ─► Stopped          (no further ticks)
//!   └─► terminal sort reply ─► Completed  (report with elapsed figures)
//! ```
//!
//! ## Guarantees
//! - **Single flight**: a new request always terminates the previous unit
//!   before spawning the next.
//! - **Clean cancellation**: termination discards the channel wholesale;
//!   nothing from a superseded unit reaches the controller.
//! - **Rate-limited progress**: one snapshot per 1000 swaps, emitted as a
//!   copy of the still-mutating array.
//! - **Exactly one terminal** reply per task that is not superseded first.
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use growsort::{Bus, GrowthScheduler, RunConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = RunConfig {
//!         size: 50_000,
//!         interval: Duration::from_millis(50),
//!         max_ticks: 10,
//!         ..RunConfig::default()
//!     };
//!     let bus = Bus::new(cfg.bus_capacity);
//!
//!     let mut scheduler = GrowthScheduler::new(cfg, bus);
//!     let report = scheduler.run().await?;
//!     println!(
//!         "sorted {} items in {} ms ({} growth ticks)",
//!         report.items.len(),
//!         report.total_ms,
//!         report.ticks,
//!     );
//!     Ok(())
//! }
//! ```

mod config;
mod engine;
mod error;
mod events;
mod scheduler;
mod subscribers;
mod timing;
mod worker;

pub mod dataset;

// ---- Public re-exports ----

pub use config::{RunConfig, MAX_INTERVAL, MAX_SIZE, MIN_INTERVAL, MIN_SIZE};
pub use engine::{Cancelled, SortRun, SNAPSHOT_EVERY};
pub use error::RuntimeError;
pub use events::{Bus, Event, EventKind};
pub use scheduler::{GrowthScheduler, RunState, SortReport};
pub use subscribers::{Subscribe, SubscriberSet};
pub use timing::{stop_opt, Timer};
pub use worker::{WorkerHandle, WorkerReply, WorkerRequest, WorkerSupervisor};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
