//! Derived tunnel view objects
//!
//! [`Step`] and [`Tunnel`] are ephemeral: rebuilt from scratch on every
//! computation and handed to the presentation layer, never persisted.

use crate::models::history::{ManualReview, VerificationAttempt};
use crate::models::types::{RawStepStatus, ResolvedStatus, StepKind, Tier, Track};
use serde::Serialize;

/// One stage of the verification tunnel, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Ordinal position in the tunnel, 0-based
    pub position: usize,
    /// Kind of the step
    pub kind: StepKind,
    /// Tier this step is evaluated against; `None` on the not-eligible track
    pub tier: Option<Tier>,
    /// Icon tag for the presentation layer
    pub icon: &'static str,
    /// Raw status the step was built from
    pub raw_status: RawStepStatus,
    /// Resolved display status
    pub status: ResolvedStatus,
    /// Whether this is the step currently requiring attention
    pub active: bool,
    /// Whether the step is not yet relevant (trailing, unreached)
    pub disabled: bool,
    /// Verification attempts relevant to this step
    pub attempts: Vec<VerificationAttempt>,
    /// Manual reviews relevant to this step (benefit milestones only)
    pub reviews: Vec<ManualReview>,
}

/// Complete derived verification view for one person at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tunnel {
    /// Track classification
    pub track: Track,
    /// Ordered steps of the track
    pub steps: Vec<Step>,
    /// Progress through the tunnel, 0 to 100
    pub progress: f64,
}

impl Tunnel {
    /// The step currently marked active, if any.
    #[must_use]
    pub fn active_step(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.active)
    }

    /// Whether the track's identity-check step has not resolved to success.
    ///
    /// Gate for the duplicate scan: a resolved identity check means any
    /// earlier duplicate flag has since been cleared.
    #[must_use]
    pub fn identity_check_unresolved(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.kind == StepKind::IdentityCheck && s.status != ResolvedStatus::Success)
    }
}
