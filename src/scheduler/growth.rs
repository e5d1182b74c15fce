//! # GrowthScheduler: the single-threaded cooperative control loop.
//!
//! One run: generate the initial dataset, issue the first sort, then react
//! to two asynchronous event sources that are **not** mutually exclusive
//! in time:
//!
//! - replies from the active unit (progress snapshots, the terminal), and
//! - periodic growth ticks.
//!
//! A tick that fires while an attempt is still executing resolves the race
//! by eager preemption: grow the best-known dataset by one element and
//! reissue `run_sort`, which terminates the in-flight unit before spawning
//! the next. The controller never blocks waiting for a result and never
//! issues termination concurrently with itself, so the single-active-unit
//! invariant holds without locks.
//!
//! ## State machine
//! ```text
//! Idle ──run()──► Running ──(tick)*──► Stopped (tick budget exhausted)
//!                    │                    │
//!                    └──── terminal ──────┴──► Completed
//! ```
//!
//! The tick that exhausts the budget still grows and reissues; the
//! in-flight attempt then runs to completion and delivers the terminal.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{self, MissedTickBehavior};

use crate::config::RunConfig;
use crate::dataset;
use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};
use crate::timing::Timer;
use crate::worker::{WorkerReply, WorkerSupervisor};

use super::report::SortReport;

/// Where a scheduler is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run started yet.
    Idle,
    /// A run is in progress and growth ticks may still fire.
    Running,
    /// The tick budget is exhausted; the final attempt is still in flight.
    Stopped,
    /// The terminal sorted dataset was delivered.
    Completed,
}

/// What the select loop observed on one turn.
enum Step {
    Reply(Result<WorkerReply, RuntimeError>),
    Tick,
}

/// Grows the dataset on a timer and force-restarts sorting, up to a
/// bounded number of times.
pub struct GrowthScheduler {
    cfg: RunConfig,
    bus: Bus,
    supervisor: WorkerSupervisor,
    state: RunState,
    rng: StdRng,
}

impl GrowthScheduler {
    /// Creates a scheduler with an OS-seeded random source.
    ///
    /// The configuration is clamped at this boundary; the core never sees
    /// out-of-range values.
    pub fn new(cfg: RunConfig, bus: Bus) -> Self {
        Self::with_rng(cfg, bus, StdRng::from_os_rng())
    }

    /// Creates a scheduler with an explicit random source (deterministic
    /// datasets for tests).
    pub fn with_rng(cfg: RunConfig, bus: Bus, rng: StdRng) -> Self {
        let cfg = cfg.clamped();
        let supervisor = WorkerSupervisor::new(bus.clone());
        Self {
            cfg,
            bus,
            supervisor,
            state: RunState::Idle,
            rng,
        }
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The clamped configuration this scheduler runs with.
    pub fn config(&self) -> &RunConfig {
        &self.cfg
    }

    /// Drives one full run to its terminal sorted dataset.
    ///
    /// Returns the report on completion, or the error that aborted the run
    /// (a unit failure is fatal and not retried).
    pub async fn run(&mut self) -> Result<SortReport, RuntimeError> {
        self.state = RunState::Running;
        let overall = Timer::start("run");

        let mut best = dataset::create(self.cfg.size, &mut self.rng);
        self.bus
            .publish(Event::now(EventKind::RunStarted).with_len(best.len()));

        let mut attempt = Some(Timer::start("attempt"));
        self.supervisor.run_sort(best.clone());

        // With growth disabled the ticker is never polled; the dummy
        // period only keeps interval_at away from a zero panic.
        let growth_enabled = self.cfg.growth_enabled();
        let max_ticks = self.cfg.max_ticks;
        let period = if growth_enabled {
            self.cfg.interval
        } else {
            Duration::from_secs(1)
        };
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks: u32 = 0;
        let mut regrow_total: u64 = 0;

        loop {
            let step = tokio::select! {
                reply = self.supervisor.recv() => Step::Reply(reply),
                _ = ticker.tick(), if growth_enabled && ticks < max_ticks => Step::Tick,
            };

            match step {
                Step::Reply(reply) => match reply? {
                    WorkerReply::SortTick { items } => {
                        self.bus.publish(
                            Event::now(EventKind::SortProgress)
                                .with_generation(self.supervisor.generation())
                                .with_len(items.len()),
                        );
                        best = items;
                    }
                    WorkerReply::Sorted { items } => {
                        let final_sort_ms = self.stop_and_publish(attempt.take());
                        let total_ms = self.stop_and_publish(Some(overall));
                        self.state = RunState::Completed;
                        self.bus.publish(
                            Event::now(EventKind::RunCompleted)
                                .with_len(items.len())
                                .with_elapsed_ms(total_ms),
                        );
                        return Ok(SortReport {
                            items,
                            total_ms,
                            final_sort_ms,
                            ticks,
                            avg_regrow_ms: if ticks == 0 {
                                0
                            } else {
                                regrow_total / u64::from(ticks)
                            },
                        });
                    }
                    // This loop only ever issues sort requests; recv maps
                    // Failed to Err above.
                    WorkerReply::Init { .. }
                    | WorkerReply::IncreaseSize { .. }
                    | WorkerReply::Failed { .. } => {}
                },
                Step::Tick => {
                    ticks += 1;
                    regrow_total += self.stop_and_publish(attempt.take());
                    if ticks == max_ticks {
                        self.state = RunState::Stopped;
                        self.bus
                            .publish(Event::now(EventKind::GrowthExhausted).with_tick(ticks));
                    }
                    best = dataset::grow(&best, 1, &mut self.rng);
                    self.bus.publish(
                        Event::now(EventKind::GrowthTick)
                            .with_tick(ticks)
                            .with_len(best.len()),
                    );
                    attempt = Some(Timer::start("attempt"));
                    self.supervisor.run_sort(best.clone());
                }
            }
        }
    }

    /// Stops a timer and publishes the measurement. Absent timers yield 0.
    fn stop_and_publish(&self, timer: Option<Timer>) -> u64 {
        let Some(timer) = timer else { return 0 };
        let label: std::sync::Arc<str> = timer.label().into();
        let ms = timer.stop();
        self.bus.publish(
            Event::now(EventKind::TimerStopped)
                .with_label(label)
                .with_elapsed_ms(ms),
        );
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(cfg: RunConfig, seed: u64) -> GrowthScheduler {
        GrowthScheduler::with_rng(cfg, Bus::new(256), StdRng::seed_from_u64(seed))
    }

    fn is_sorted(items: &[u32]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[tokio::test]
    async fn run_without_growth_sorts_the_initial_dataset() {
        let cfg = RunConfig {
            size: 500,
            interval: Duration::ZERO,
            max_ticks: 0,
            ..RunConfig::default()
        };
        let mut sched = scheduler(cfg, 7);
        assert_eq!(sched.state(), RunState::Idle);

        let report = sched.run().await.unwrap();

        // Same seed, same dataset: the result must be its exact sorted
        // permutation, not merely some sorted array.
        let mut expected = dataset::create(500, &mut StdRng::seed_from_u64(7));
        expected.sort_unstable();
        assert_eq!(report.items, expected);

        assert_eq!(report.ticks, 0);
        assert_eq!(report.avg_regrow_ms, 0);
        assert_eq!(sched.state(), RunState::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_stop_at_budget_and_the_final_attempt_completes() {
        let cfg = RunConfig {
            size: 30_000,
            interval: Duration::from_millis(50),
            max_ticks: 3,
            ..RunConfig::default()
        };
        let mut sched = scheduler(cfg, 13);
        let report = sched.run().await.unwrap();

        assert_eq!(report.ticks, 3, "budget is exactly three ticks");
        assert_eq!(report.items.len(), 30_000 + 3);
        assert!(is_sorted(&report.items));
        assert_eq!(sched.state(), RunState::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn every_tick_grows_by_one_element() {
        let cfg = RunConfig {
            size: 30_000,
            interval: Duration::from_millis(100),
            max_ticks: 5,
            ..RunConfig::default()
        };
        let mut sched = scheduler(cfg, 29);
        let report = sched.run().await.unwrap();

        assert_eq!(report.items.len(), 30_000 + usize::try_from(report.ticks).unwrap());
        assert!(is_sorted(&report.items));
    }

    #[tokio::test]
    async fn config_is_clamped_at_construction() {
        let cfg = RunConfig {
            size: 0,
            interval: Duration::from_millis(1),
            max_ticks: 1,
            ..RunConfig::default()
        };
        let sched = scheduler(cfg, 1);
        assert_eq!(sched.config().size, crate::config::MIN_SIZE);
        assert_eq!(sched.config().interval, crate::config::MIN_INTERVAL);
    }

    #[tokio::test]
    async fn tiny_run_with_growth_still_completes() {
        // Two elements sort faster than any tick can fire; the run must
        // complete with zero or very few ticks rather than hang.
        let cfg = RunConfig {
            size: 2,
            interval: Duration::from_millis(50),
            max_ticks: 100,
            ..RunConfig::default()
        };
        let mut sched = scheduler(cfg, 3);
        let report = sched.run().await.unwrap();
        assert!(is_sorted(&report.items));
        assert_eq!(report.items.len(), 2 + usize::try_from(report.ticks).unwrap());
    }
}
