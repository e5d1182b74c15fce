//! Error types used by the growsort runtime.
//!
//! A failure inside an isolated unit is fatal to its task: it is surfaced
//! to the caller and the handle is discarded. No automatic retry is
//! attempted; a fresh explicit request is required.

use thiserror::Error;

/// # Errors surfaced by the supervisor and scheduler.
///
/// These represent the only two ways a task can end without a terminal
/// reply: the unit panicked, or its channel closed unexpectedly.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The isolated unit panicked; the task is abandoned without retry.
    #[error("sort unit failed: {reason}")]
    UnitFailed {
        /// Panic payload rendered as a message.
        reason: String,
    },

    /// The unit's reply channel closed before a terminal reply arrived.
    #[error("sort unit channel closed before terminal reply")]
    ChannelClosed,
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::UnitFailed { .. } => "unit_failed",
            RuntimeError::ChannelClosed => "channel_closed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::UnitFailed { reason } => format!("unit failed: {reason}"),
            RuntimeError::ChannelClosed => "channel closed before terminal reply".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let failed = RuntimeError::UnitFailed {
            reason: "boom".into(),
        };
        assert_eq!(failed.as_label(), "unit_failed");
        assert_eq!(RuntimeError::ChannelClosed.as_label(), "channel_closed");
    }

    #[test]
    fn messages_carry_the_reason() {
        let failed = RuntimeError::UnitFailed {
            reason: "boom".into(),
        };
        assert!(failed.as_message().contains("boom"));
        assert!(failed.to_string().contains("boom"));
    }
}
