//! Common domain type definitions
//!
//! This module contains the enum types shared across the verification
//! tunnel: benefit tiers, verification tracks, step and check kinds, and
//! the raw/resolved status vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age-based benefit tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Tier granted to minors
    Minor,
    /// Tier granted to adults
    Adult,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minor => write!(f, "minor"),
            Self::Adult => write!(f, "adult"),
        }
    }
}

/// Verification track assigned to a person
///
/// The track fixes the shape of the tunnel: which steps appear, in which
/// order, and against which tier each step is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// No verification path applies (unknown birth date, or too old at signup)
    NotEligible,
    /// Minor-tier verification only
    Minor,
    /// Adult-tier verification only
    Adult,
    /// Started as a minor, aged into the adult tier while in the system
    MinorToAdult,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEligible => write!(f, "not eligible"),
            Self::Minor => write!(f, "minor"),
            Self::Adult => write!(f, "adult"),
            Self::MinorToAdult => write!(f, "minor then adult"),
        }
    }
}

/// Raw per-step status supplied by the external status collaborator
///
/// Opaque input to this engine; only the status resolver and the
/// activation scan interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawStepStatus {
    /// Step completed successfully
    Done,
    /// Step was evaluated and rejected
    Failed,
    /// Step is being processed
    InProgress,
    /// Step was flagged for human attention
    Flagged,
    /// Step has not been started
    ToDo,
    /// Step does not apply to this person
    NotApplicable,
    /// Step is switched off for this deployment
    NotEnabled,
    /// Step was deliberately skipped
    Skipped,
    /// No information exists for this step
    Void,
}

impl RawStepStatus {
    /// Whether this status means the step has actually been evaluated,
    /// as opposed to not yet reached or not relevant to the track.
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(
            self,
            Self::Done | Self::Failed | Self::InProgress | Self::Flagged
        )
    }
}

impl From<&str> for RawStepStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "done" | "ok" => Self::Done,
            "failed" | "ko" => Self::Failed,
            "in_progress" | "pending" => Self::InProgress,
            "flagged" | "suspicious" => Self::Flagged,
            "to_do" | "todo" => Self::ToDo,
            "not_applicable" | "n/a" => Self::NotApplicable,
            "not_enabled" => Self::NotEnabled,
            "skipped" => Self::Skipped,
            _ => Self::Void,
        }
    }
}

/// Tri-state (plus "nothing to show") display status of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedStatus {
    /// Step is complete or does not block progress
    Success,
    /// Step needs attention but is not a failure
    Warning,
    /// Step failed
    Error,
    /// Nothing to display for this step
    None,
}

impl fmt::Display for ResolvedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Kind of a tunnel step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Email address confirmed
    EmailValidation,
    /// Phone number confirmed
    PhoneValidation,
    /// Declarative profile filled in
    ProfileCompletion,
    /// Identity document checked
    IdentityCheck,
    /// Statement on honor signed
    HonorStatement,
    /// Benefit granted milestone for the step's tier
    BenefitGranted,
}

impl StepKind {
    /// Whether a verification attempt of the given kind belongs to this step.
    #[must_use]
    pub const fn matches(self, check: CheckKind) -> bool {
        matches!(
            (self, check),
            (Self::EmailValidation, CheckKind::EmailValidation)
                | (Self::PhoneValidation, CheckKind::PhoneValidation)
                | (Self::ProfileCompletion, CheckKind::ProfileCompletion)
                | (Self::IdentityCheck, CheckKind::IdentityDocument)
                | (Self::HonorStatement, CheckKind::HonorStatement)
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailValidation => write!(f, "email validation"),
            Self::PhoneValidation => write!(f, "phone validation"),
            Self::ProfileCompletion => write!(f, "profile completion"),
            Self::IdentityCheck => write!(f, "identity check"),
            Self::HonorStatement => write!(f, "honor statement"),
            Self::BenefitGranted => write!(f, "benefit granted"),
        }
    }
}

/// Kind of an automated verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    /// Email confirmation check
    EmailValidation,
    /// Phone number confirmation check
    PhoneValidation,
    /// Declarative profile completeness check
    ProfileCompletion,
    /// Identity document check
    IdentityDocument,
    /// Statement-on-honor check
    HonorStatement,
}

/// Terminal status of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check rejected
    Ko,
    /// Check passed technically but was flagged for review
    Suspicious,
    /// Check awaiting an external provider
    Pending,
    /// Check abandoned before completion
    Canceled,
    /// Provider returned an error
    Error,
}

/// Machine-readable reason code attached to a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Another account already exists for the same person
    DuplicateUser,
    /// The identity document number is already registered
    DuplicateIdDocumentNumber,
    /// Declared age below the eligible range
    AgeTooYoung,
    /// Declared age above the eligible range
    AgeTooOld,
    /// Identity document expired
    IdCheckExpired,
    /// Declared name does not match the document
    NameMismatch,
}

impl ReasonCode {
    /// Whether this code flags a duplicate identity.
    #[must_use]
    pub const fn is_duplicate_flag(self) -> bool {
        matches!(self, Self::DuplicateUser | Self::DuplicateIdDocumentNumber)
    }
}

/// Outcome of a manual review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewOutcome {
    /// Reviewer confirmed the person's eligibility
    Approved,
    /// Reviewer rejected the person
    Rejected,
    /// Reviewer escalated to another verification channel
    Escalated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_status_from_string() {
        assert_eq!(RawStepStatus::from("done"), RawStepStatus::Done);
        assert_eq!(RawStepStatus::from("KO"), RawStepStatus::Failed);
        assert_eq!(RawStepStatus::from(" in_progress "), RawStepStatus::InProgress);
        assert_eq!(RawStepStatus::from("n/a"), RawStepStatus::NotApplicable);
        assert_eq!(RawStepStatus::from("garbage"), RawStepStatus::Void);
    }

    #[test]
    fn test_step_kind_matches_check_kind() {
        assert!(StepKind::IdentityCheck.matches(CheckKind::IdentityDocument));
        assert!(StepKind::PhoneValidation.matches(CheckKind::PhoneValidation));
        assert!(!StepKind::BenefitGranted.matches(CheckKind::IdentityDocument));
        assert!(!StepKind::EmailValidation.matches(CheckKind::HonorStatement));
    }

    #[test]
    fn test_duplicate_flag_codes() {
        assert!(ReasonCode::DuplicateUser.is_duplicate_flag());
        assert!(ReasonCode::DuplicateIdDocumentNumber.is_duplicate_flag());
        assert!(!ReasonCode::AgeTooOld.is_duplicate_flag());
    }
}
