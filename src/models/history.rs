//! Historical record models
//!
//! Immutable records accumulated against a person: automated verification
//! attempts, manual reviews, account lifecycle events, email changes and
//! import-batch statuses. The [`TimelineItem`] sum type unifies them for
//! the audit timeline merge, so the merge/sort logic stays shape-agnostic.

use crate::models::types::{CheckKind, CheckStatus, ReasonCode, ReviewOutcome, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One automated or semi-automated identity/eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationAttempt {
    /// Attempt identifier
    pub id: u64,
    /// Kind of check performed
    pub kind: CheckKind,
    /// Tier the check was evaluated against, if any
    pub tier: Option<Tier>,
    /// Terminal status of the check
    pub status: CheckStatus,
    /// Free-text reason recorded by the checker
    pub reason: Option<String>,
    /// Machine-readable reason codes
    pub reason_codes: Vec<ReasonCode>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Optional technical detail payload from the provider
    pub detail: Option<serde_json::Value>,
}

impl VerificationAttempt {
    /// Whether this attempt applies to a step evaluated against `tier`.
    ///
    /// A tierless attempt (for example a phone validation performed before
    /// any tier was assigned) applies to every tier.
    #[must_use]
    pub fn applies_to(&self, tier: Option<Tier>) -> bool {
        self.tier.is_none() || self.tier == tier
    }
}

/// A human reviewer's decision on a person's eligibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualReview {
    /// Review identifier
    pub id: u64,
    /// When the review was performed
    pub reviewed_at: DateTime<Utc>,
    /// Tier the review covered, if any
    pub tier: Option<Tier>,
    /// Outcome of the review
    pub outcome: ReviewOutcome,
    /// Free-text reason written by the reviewer
    pub reason: Option<String>,
}

/// Kind of an account lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEventKind {
    /// Account was created
    AccountCreated,
    /// Account was suspended
    Suspended,
    /// Account suspension was lifted
    Unsuspended,
    /// Account was deleted
    Deleted,
}

/// One account lifecycle event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Kind of the event
    pub kind: LifecycleEventKind,
    /// When the event happened, if recorded
    pub at: Option<DateTime<Utc>>,
    /// Optional comment attached by the actor
    pub comment: Option<String>,
}

impl LifecycleEvent {
    /// Synthesized account-creation entry for timelines that lack one.
    #[must_use]
    pub const fn account_created(at: DateTime<Utc>) -> Self {
        Self {
            kind: LifecycleEventKind::AccountCreated,
            at: Some(at),
            comment: None,
        }
    }
}

/// One recorded email address change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailChange {
    /// When the change happened, if recorded
    pub at: Option<DateTime<Utc>>,
    /// Previous address
    pub old_email: String,
    /// New address
    pub new_email: String,
}

/// Status of one beneficiary import batch run for the person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBatchStatus {
    /// When the batch status was recorded, if known
    pub at: Option<DateTime<Utc>>,
    /// Displayable status label
    pub label: String,
    /// Free-text detail
    pub detail: Option<String>,
}

/// One entry of the merged audit timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TimelineItem {
    /// Account lifecycle event
    Lifecycle(LifecycleEvent),
    /// Email address change
    EmailChange(EmailChange),
    /// Automated verification attempt
    Verification(VerificationAttempt),
    /// Manual review decision
    Review(ManualReview),
    /// Import-batch status
    ImportBatch(ImportBatchStatus),
}

impl TimelineItem {
    /// Event date used for merging; `None` sorts after every dated entry.
    #[must_use]
    pub fn event_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Lifecycle(e) => e.at,
            Self::EmailChange(e) => e.at,
            Self::Verification(a) => Some(a.created_at),
            Self::Review(r) => Some(r.reviewed_at),
            Self::ImportBatch(b) => b.at,
        }
    }
}
