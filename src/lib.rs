//! Verification tunnel engine for the cultural pass.
//!
//! Turns raw per-step verification statuses and a person's historical
//! records into a displayable, decision-ready view: the verification
//! track, the ordered step sequence with one active step and a progress
//! value, a merged audit timeline and an optional duplicate-account
//! reference. Pure in-process computation; fetching the inputs and
//! rendering the outputs belong to the caller.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::TunnelConfig;
pub use error::{Result, TunnelError};

// Domain models
pub use models::{
    EmailChange, ImportBatchStatus, LifecycleEvent, LifecycleEventKind, ManualReview, Person,
    Step, TimelineItem, Tunnel, VerificationAttempt,
};
pub use models::{
    CheckKind, CheckStatus, RawStepStatus, ReasonCode, ResolvedStatus, ReviewOutcome, StepKind,
    Tier, Track,
};

// Pipeline entry points
pub use algorithm::{StepStatusSource, build_tunnel, duplicate_reference, merge_timeline};
