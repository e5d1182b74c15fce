//! # Typed message protocol between controller and isolated units.
//!
//! Every message is an `action` tag plus a payload. The enums make unknown
//! actions unrepresentable; tags are kept as strings for events and logs.
//!
//! | Request         | Replies                                          |
//! |-----------------|--------------------------------------------------|
//! | `init`          | `init` (terminal)                                |
//! | `increase-size` | `increase-size` (terminal)                       |
//! | `sort`          | `sort-tick` (0..n), then `sort` (terminal)       |
//!
//! A unit panic is rendered as a `failed` reply, terminal for the task.
//!
//! Payloads are owned `Vec<u32>` values: crossing the isolation boundary
//! always moves or copies, never aliases.

/// Requests accepted by an isolated unit.
#[derive(Debug, Clone)]
pub enum WorkerRequest {
    /// Generate a fresh dataset of `size` elements.
    Init { size: usize },
    /// Extend `items` by `by` freshly drawn elements.
    IncreaseSize { items: Vec<u32>, by: usize },
    /// Sort `items` in place, reporting periodic progress.
    Sort { items: Vec<u32> },
}

impl WorkerRequest {
    /// Wire tag for events and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkerRequest::Init { .. } => "init",
            WorkerRequest::IncreaseSize { .. } => "increase-size",
            WorkerRequest::Sort { .. } => "sort",
        }
    }

    /// Length of the dataset this request will produce.
    pub fn payload_len(&self) -> usize {
        match self {
            WorkerRequest::Init { size } => *size,
            WorkerRequest::IncreaseSize { items, by } => items.len() + by,
            WorkerRequest::Sort { items } => items.len(),
        }
    }
}

/// Replies emitted by an isolated unit.
#[derive(Debug)]
pub enum WorkerReply {
    /// Terminal reply to [`WorkerRequest::Init`]: the fresh dataset.
    Init { items: Vec<u32> },
    /// Terminal reply to [`WorkerRequest::IncreaseSize`]: the extended dataset.
    IncreaseSize { items: Vec<u32> },
    /// Rate-limited snapshot of a still-running sort (partially ordered).
    SortTick { items: Vec<u32> },
    /// Terminal reply to [`WorkerRequest::Sort`]: the fully sorted dataset.
    Sorted { items: Vec<u32> },
    /// The unit panicked; terminal for the task.
    Failed { reason: String },
}

impl WorkerReply {
    /// Wire tag for events and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkerReply::Init { .. } => "init",
            WorkerReply::IncreaseSize { .. } => "increase-size",
            WorkerReply::SortTick { .. } => "sort-tick",
            WorkerReply::Sorted { .. } => "sort",
            WorkerReply::Failed { .. } => "failed",
        }
    }

    /// Terminal replies end a unit's task; at most one is delivered.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerReply::SortTick { .. })
    }

    /// Length of the carried dataset, if the reply carries one.
    pub fn payload_len(&self) -> Option<usize> {
        match self {
            WorkerReply::Init { items }
            | WorkerReply::IncreaseSize { items }
            | WorkerReply::SortTick { items }
            | WorkerReply::Sorted { items } => Some(items.len()),
            WorkerReply::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_the_wire_protocol() {
        assert_eq!(WorkerRequest::Init { size: 1 }.tag(), "init");
        assert_eq!(
            WorkerRequest::IncreaseSize {
                items: vec![],
                by: 1
            }
            .tag(),
            "increase-size"
        );
        assert_eq!(WorkerRequest::Sort { items: vec![] }.tag(), "sort");

        assert_eq!(WorkerReply::SortTick { items: vec![] }.tag(), "sort-tick");
        assert_eq!(WorkerReply::Sorted { items: vec![] }.tag(), "sort");
    }

    #[test]
    fn only_ticks_are_non_terminal() {
        assert!(!WorkerReply::SortTick { items: vec![] }.is_terminal());
        assert!(WorkerReply::Init { items: vec![] }.is_terminal());
        assert!(WorkerReply::IncreaseSize { items: vec![] }.is_terminal());
        assert!(WorkerReply::Sorted { items: vec![] }.is_terminal());
        assert!(WorkerReply::Failed {
            reason: String::new()
        }
        .is_terminal());
    }
}
