//! # Runtime events emitted by the supervisor and scheduler.
//!
//! [`EventKind`] classifies events across three categories:
//! - **Unit lifecycle**: spawn, termination, completion, failure of
//!   isolated execution units
//! - **Run lifecycle**: scheduler start, growth ticks, completion
//! - **Instrumentation**: timer stops
//!
//! [`Event`] carries optional metadata (generation, action label, dataset
//! length, tick number, elapsed milliseconds, failure reason) attached via
//! `with_*` builders.
//!
//! ## Ordering
//! Each event gets a globally unique, monotonically increasing sequence
//! number (`seq`); use it to restore exact order when events are consumed
//! out of band.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Unit lifecycle ===
    /// A new isolated unit was spawned for a request.
    ///
    /// Sets: `generation`, `label` (request tag), `len` (payload length).
    UnitSpawned,

    /// The previous unit was terminated ahead of a new submission.
    ///
    /// Sets: `generation` (of the terminated unit).
    UnitTerminated,

    /// The current unit delivered its terminal reply.
    ///
    /// Sets: `generation`, `label` (reply tag), `len`.
    UnitCompleted,

    /// The current unit panicked; the task is abandoned.
    ///
    /// Sets: `generation`, `reason`.
    UnitFailed,

    // === Run lifecycle ===
    /// A scheduler run started.
    ///
    /// Sets: `len` (initial dataset size).
    RunStarted,

    /// A growth tick fired: dataset grown, sort reissued.
    ///
    /// Sets: `tick`, `len` (post-growth length).
    GrowthTick,

    /// The tick budget is exhausted; no further growth this run.
    ///
    /// Sets: `tick`.
    GrowthExhausted,

    /// A progress snapshot was adopted as the best-known dataset.
    ///
    /// Sets: `generation`, `len`.
    SortProgress,

    /// The run delivered its final sorted dataset.
    ///
    /// Sets: `len`, `elapsed_ms` (overall).
    RunCompleted,

    // === Instrumentation ===
    /// A timer was stopped.
    ///
    /// Sets: `label`, `elapsed_ms`.
    TimerStopped,
}

/// Runtime event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Generation id of the unit involved, if any.
    pub generation: Option<u64>,
    /// Action tag or timer label.
    pub label: Option<Arc<str>>,
    /// Dataset length involved.
    pub len: Option<usize>,
    /// Growth tick number (1-based).
    pub tick: Option<u32>,
    /// Elapsed milliseconds for timer/run events.
    pub elapsed_ms: Option<u64>,
    /// Human-readable failure reason.
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates an event of the given kind with the current timestamp and
    /// the next sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            generation: None,
            label: None,
            len: None,
            tick: None,
            elapsed_ms: None,
            reason: None,
        }
    }

    /// Attaches a unit generation id.
    #[inline]
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Attaches an action tag or timer label.
    #[inline]
    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a dataset length.
    #[inline]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// Attaches a growth tick number.
    #[inline]
    pub fn with_tick(mut self, tick: u32) -> Self {
        self.tick = Some(tick);
        self
    }

    /// Attaches an elapsed duration in milliseconds.
    #[inline]
    pub fn with_elapsed_ms(mut self, ms: u64) -> Self {
        self.elapsed_ms = Some(ms);
        self
    }

    /// Attaches a human-readable failure reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_are_monotonic() {
        let a = Event::now(EventKind::RunStarted);
        let b = Event::now(EventKind::RunStarted);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builders_attach_metadata() {
        let ev = Event::now(EventKind::UnitSpawned)
            .with_generation(3)
            .with_label("sort")
            .with_len(128)
            .with_tick(2)
            .with_elapsed_ms(40)
            .with_reason("why not");

        assert_eq!(ev.kind, EventKind::UnitSpawned);
        assert_eq!(ev.generation, Some(3));
        assert_eq!(ev.label.as_deref(), Some("sort"));
        assert_eq!(ev.len, Some(128));
        assert_eq!(ev.tick, Some(2));
        assert_eq!(ev.elapsed_ms, Some(40));
        assert_eq!(ev.reason.as_deref(), Some("why not"));
    }
}
