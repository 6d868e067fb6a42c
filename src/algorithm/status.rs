//! Raw status resolution
//!
//! Maps the externally supplied per-step status to the display tri-state.
//! Table-driven: the mapping never depends on the step kind.

use crate::models::types::{RawStepStatus, ResolvedStatus};

/// Resolve a raw step status to its display status.
#[must_use]
pub const fn resolve(raw: RawStepStatus) -> ResolvedStatus {
    match raw {
        RawStepStatus::Done
        | RawStepStatus::NotApplicable
        | RawStepStatus::NotEnabled
        | RawStepStatus::Skipped => ResolvedStatus::Success,
        RawStepStatus::Failed => ResolvedStatus::Error,
        RawStepStatus::InProgress | RawStepStatus::Flagged => ResolvedStatus::Warning,
        RawStepStatus::ToDo | RawStepStatus::Void => ResolvedStatus::None,
    }
}
