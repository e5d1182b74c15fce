//! Runtime events: types and broadcast bus.
//!
//! Groups the event **data model** and the **bus** used to publish and
//! subscribe to events emitted by the worker supervisor and the growth
//! scheduler.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `WorkerSupervisor` (unit lifecycle), `GrowthScheduler`
//!   (run lifecycle, ticks, timers).
//! - **Consumers**: `SubscriberSet::attach` listeners fanning out to
//!   [`Subscribe`](crate::Subscribe) implementations.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
