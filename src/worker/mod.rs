//! # Isolated execution units and their single-flight supervisor.
//!
//! One request = one unit: a dedicated OS thread with no shared memory,
//! talking back exclusively through an owned-value channel. The
//! [`WorkerSupervisor`] enforces that at most one unit is ever live and
//! that a superseded unit's messages are never observed.
//!
//! Internal wiring:
//! - [`protocol`]: typed `{action, result}` request/reply pairs;
//! - [`handle`]: spawn, receive, terminate one unit;
//! - [`supervisor`]: the single-flight slot and eager preemption.

mod handle;
mod protocol;
mod supervisor;

pub use handle::WorkerHandle;
pub use protocol::{WorkerReply, WorkerRequest};
pub use supervisor::WorkerSupervisor;
