//! Error handling for the tunnel engine.

use crate::models::types::{StepKind, Tier};

/// Errors that can occur while computing a verification tunnel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TunnelError {
    /// The external status collaborator returned no value for a required
    /// (tier, step-kind) pair. Never defaulted: a missing status would be
    /// indistinguishable from a deliberately not-applicable one.
    #[error("missing raw status for tier {tier:?}, step kind {kind:?}")]
    MissingStatus {
        /// Tier of the step whose status was requested
        tier: Option<Tier>,
        /// Kind of the step whose status was requested
        kind: StepKind,
    },

    /// The track classifier reached a state outside its decision table
    #[error("tier combination not covered by the classification table: {0}")]
    UnknownTierCombination(String),
}

/// Result type for tunnel engine operations
pub type Result<T> = std::result::Result<T, TunnelError>;
