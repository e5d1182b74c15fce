//! # Event subscriber trait.
//!
//! [`Subscribe`] is the extension point for plugging custom event handlers
//! (logging, metrics, assertions in tests) into the runtime.
//!
//! Each subscriber gets a dedicated worker task and a bounded queue; a slow
//! subscriber only affects its own queue, and a panicking subscriber is
//! isolated from the others.

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for runtime observability.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from a dedicated worker task, in FIFO order per subscriber.
    async fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in drop/panic diagnostics.
    ///
    /// Prefer short, descriptive names; the default is the type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity for this subscriber.
    ///
    /// When the queue is full the new event is dropped for this subscriber
    /// only. Clamped to a minimum of 1. Default: 256.
    fn queue_capacity(&self) -> usize {
        256
    }
}
