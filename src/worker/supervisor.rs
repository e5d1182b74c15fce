//! # WorkerSupervisor: single-flight front door to the isolated units.
//!
//! The supervisor owns one slot. Every submission (initial, growth-driven
//! restart, or explicit re-sort) terminates whatever occupies the slot
//! before spawning the replacement (**eager preemption**). Termination
//! discards the old unit's channel wholesale, so a reply already in flight
//! from a superseded unit can never be mistaken for the active task's.
//!
//! ```text
//! run_init / run_grow / run_sort
//!         │
//!         ├─► terminate_current()      (cancel token, drop channel)
//!         ├─► generation += 1
//!         └─► slot = WorkerHandle::spawn(generation, request)
//!
//! recv()
//!         ├─ no unit       → pends forever (safe in a select! arm)
//!         ├─ sort-tick     → Ok(reply), slot kept
//!         ├─ terminal      → Ok(reply), slot cleared
//!         ├─ failed        → Err(UnitFailed), slot cleared, no retry
//!         └─ channel gone  → Err(ChannelClosed), slot cleared
//! ```
//!
//! Only one control thread ever calls submission and `recv`, which is what
//! makes the single-active-unit invariant hold without locks.

use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};

use super::handle::WorkerHandle;
use super::protocol::{WorkerReply, WorkerRequest};

/// Runs one isolated unit per request and enforces single-flight execution.
pub struct WorkerSupervisor {
    bus: Bus,
    slot: Option<WorkerHandle>,
    generation: u64,
}

impl WorkerSupervisor {
    /// Creates a supervisor publishing unit lifecycle events to `bus`.
    pub fn new(bus: Bus) -> Self {
        Self {
            bus,
            slot: None,
            generation: 0,
        }
    }

    /// Requests a freshly generated dataset of `size` elements.
    ///
    /// Terminal reply: `init { array }`.
    pub fn run_init(&mut self, size: usize) -> u64 {
        self.submit(WorkerRequest::Init { size })
    }

    /// Requests `items` extended by `by` fresh elements.
    ///
    /// Terminal reply: `increase-size { array }`.
    pub fn run_grow(&mut self, items: Vec<u32>, by: usize) -> u64 {
        self.submit(WorkerRequest::IncreaseSize { items, by })
    }

    /// Requests a sort of `items`.
    ///
    /// Zero or more `sort-tick` replies, then exactly one `sort` terminal,
    /// unless a later submission supersedes the attempt first.
    pub fn run_sort(&mut self, items: Vec<u32>) -> u64 {
        self.submit(WorkerRequest::Sort { items })
    }

    /// True while a unit occupies the slot.
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    /// Generation id of the most recent submission (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Terminates the current unit, if any.
    ///
    /// Unconditional and immediate from the controller's point of view:
    /// no graceful drain, partial results are discarded.
    pub fn terminate_current(&mut self) {
        if let Some(handle) = self.slot.take() {
            let generation = handle.generation();
            handle.terminate();
            self.bus
                .publish(Event::now(EventKind::UnitTerminated).with_generation(generation));
        }
    }

    fn submit(&mut self, request: WorkerRequest) -> u64 {
        self.terminate_current();
        self.generation += 1;
        let generation = self.generation;
        self.bus.publish(
            Event::now(EventKind::UnitSpawned)
                .with_generation(generation)
                .with_label(request.tag())
                .with_len(request.payload_len()),
        );
        self.slot = Some(WorkerHandle::spawn(generation, request));
        generation
    }

    /// Awaits the next reply from the current unit.
    ///
    /// Pends forever while no unit is active, so it can sit in a `select!`
    /// arm alongside timer ticks. Terminal replies clear the slot. A unit
    /// failure is fatal to the task: the error is surfaced, the slot is
    /// cleared, and no retry is attempted.
    pub async fn recv(&mut self) -> Result<WorkerReply, RuntimeError> {
        let reply = match self.slot.as_mut() {
            Some(handle) => handle.recv().await,
            None => std::future::pending::<Option<WorkerReply>>().await,
        };
        let generation = self.generation;
        match reply {
            Some(WorkerReply::Failed { reason }) => {
                self.slot = None;
                self.bus.publish(
                    Event::now(EventKind::UnitFailed)
                        .with_generation(generation)
                        .with_reason(reason.clone()),
                );
                Err(RuntimeError::UnitFailed { reason })
            }
            Some(reply) => {
                if reply.is_terminal() {
                    self.slot = None;
                    let mut ev = Event::now(EventKind::UnitCompleted)
                        .with_generation(generation)
                        .with_label(reply.tag());
                    if let Some(len) = reply.payload_len() {
                        ev = ev.with_len(len);
                    }
                    self.bus.publish(ev);
                }
                Ok(reply)
            }
            None => {
                self.slot = None;
                Err(RuntimeError::ChannelClosed)
            }
        }
    }
}
