//! Domain models for the verification tunnel
//!
//! Input entities (person, historical records) and the derived view
//! objects the engine produces.

pub mod history;
pub mod person;
pub mod step;
pub mod types;

pub use history::{
    EmailChange, ImportBatchStatus, LifecycleEvent, LifecycleEventKind, ManualReview,
    TimelineItem, VerificationAttempt,
};
pub use person::Person;
pub use step::{Step, Tunnel};
pub use types::{
    CheckKind, CheckStatus, RawStepStatus, ReasonCode, ResolvedStatus, ReviewOutcome, StepKind,
    Tier, Track,
};
