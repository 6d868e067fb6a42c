//! Active-step scan and progress
//!
//! The scan walks the step list from the last step toward the first. The
//! first step carrying an actually-evaluated raw status (done, failed, in
//! progress or flagged) terminates the scan: it becomes the active step
//! unless it resolved to an error. Steps passed over on the way are
//! trailing, not-yet-relevant ones and are disabled. Steps before the
//! termination point are left untouched; they are assumed already
//! resolved and are not re-validated.

use crate::models::step::Step;
use crate::models::types::ResolvedStatus;

/// Mark at most one step active and flag trailing unreached steps disabled.
///
/// Returns the index of the active step, or `None` when the scan reached
/// the front of the list without finding an evaluated status, or when the
/// terminating step resolved to an error.
pub fn mark_active_step(steps: &mut [Step]) -> Option<usize> {
    for index in (0..steps.len()).rev() {
        let step = &mut steps[index];
        if step.raw_status.is_evaluated() {
            step.active = step.status != ResolvedStatus::Error;
            return step.active.then_some(index);
        }
        step.disabled = true;
    }
    None
}

/// Progress through the tunnel as a 0–100 value.
///
/// The active step's 0-based index scaled over the step count; the last
/// step yields exactly 100. Zero when no step is active. Step lists are
/// at least 2 long by construction.
#[must_use]
pub fn progress(steps: &[Step]) -> f64 {
    match steps.iter().position(|s| s.active) {
        Some(index) => index as f64 * (100.0 / (steps.len() - 1) as f64),
        None => 0.0,
    }
}
