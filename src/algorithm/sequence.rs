//! Step sequence construction
//!
//! One data-driven layout table maps each track to its ordered list of
//! step descriptors; the builder instantiates the descriptors against the
//! externally supplied raw statuses and attaches the relevant history to
//! each step. The per-track sequences deliberately repeat step kinds on
//! the combined track (profile completion appears once per tier) because
//! each tier evaluates its steps independently.

use std::collections::HashMap;

use crate::algorithm::status::resolve;
use crate::error::{Result, TunnelError};
use crate::models::history::{ManualReview, VerificationAttempt};
use crate::models::person::Person;
use crate::models::step::Step;
use crate::models::types::{RawStepStatus, StepKind, Tier, Track};

/// External collaborator supplying the raw status of each tunnel step.
///
/// Computing a status (for example "is the phone validated") is out of
/// scope here; the engine only consumes the value.
pub trait StepStatusSource {
    /// Raw status for the given (tier, step-kind) pair, or `None` when the
    /// collaborator has no value for it.
    fn raw_status(&self, tier: Option<Tier>, kind: StepKind) -> Option<RawStepStatus>;
}

impl StepStatusSource for HashMap<(Option<Tier>, StepKind), RawStepStatus> {
    fn raw_status(&self, tier: Option<Tier>, kind: StepKind) -> Option<RawStepStatus> {
        self.get(&(tier, kind)).copied()
    }
}

/// Static descriptor of one step within a track layout
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    /// Kind of the step
    pub kind: StepKind,
    /// Tier the step is evaluated against
    pub tier: Option<Tier>,
    /// Icon tag for the presentation layer
    pub icon: &'static str,
}

const fn step(kind: StepKind, tier: Option<Tier>, icon: &'static str) -> StepTemplate {
    StepTemplate { kind, tier, icon }
}

const NOT_ELIGIBLE_STEPS: &[StepTemplate] = &[
    step(StepKind::EmailValidation, None, "bi-envelope-check"),
    step(StepKind::ProfileCompletion, None, "bi-person-lines-fill"),
];

const MINOR_STEPS: &[StepTemplate] = &[
    step(StepKind::EmailValidation, Some(Tier::Minor), "bi-envelope-check"),
    step(StepKind::PhoneValidation, Some(Tier::Minor), "bi-telephone"),
    step(StepKind::ProfileCompletion, Some(Tier::Minor), "bi-person-lines-fill"),
    step(StepKind::IdentityCheck, Some(Tier::Minor), "bi-person-vcard"),
    step(StepKind::HonorStatement, Some(Tier::Minor), "bi-pen"),
    step(StepKind::BenefitGranted, Some(Tier::Minor), "bi-award"),
];

const ADULT_STEPS: &[StepTemplate] = &[
    step(StepKind::EmailValidation, Some(Tier::Adult), "bi-envelope-check"),
    step(StepKind::PhoneValidation, Some(Tier::Adult), "bi-telephone"),
    step(StepKind::ProfileCompletion, Some(Tier::Adult), "bi-person-lines-fill"),
    step(StepKind::IdentityCheck, Some(Tier::Adult), "bi-person-vcard"),
    step(StepKind::HonorStatement, Some(Tier::Adult), "bi-pen"),
    step(StepKind::BenefitGranted, Some(Tier::Adult), "bi-award"),
];

// Minor half without phone validation, then the adult half picking up
// from phone validation. 10 steps total.
const MINOR_TO_ADULT_STEPS: &[StepTemplate] = &[
    step(StepKind::EmailValidation, Some(Tier::Minor), "bi-envelope-check"),
    step(StepKind::ProfileCompletion, Some(Tier::Minor), "bi-person-lines-fill"),
    step(StepKind::IdentityCheck, Some(Tier::Minor), "bi-person-vcard"),
    step(StepKind::HonorStatement, Some(Tier::Minor), "bi-pen"),
    step(StepKind::BenefitGranted, Some(Tier::Minor), "bi-award"),
    step(StepKind::PhoneValidation, Some(Tier::Adult), "bi-telephone"),
    step(StepKind::ProfileCompletion, Some(Tier::Adult), "bi-person-lines-fill"),
    step(StepKind::IdentityCheck, Some(Tier::Adult), "bi-person-vcard"),
    step(StepKind::HonorStatement, Some(Tier::Adult), "bi-pen"),
    step(StepKind::BenefitGranted, Some(Tier::Adult), "bi-award"),
];

/// Ordered step descriptors for a track.
#[must_use]
pub const fn layout(track: Track) -> &'static [StepTemplate] {
    match track {
        Track::NotEligible => NOT_ELIGIBLE_STEPS,
        Track::Minor => MINOR_STEPS,
        Track::Adult => ADULT_STEPS,
        Track::MinorToAdult => MINOR_TO_ADULT_STEPS,
    }
}

/// Build the ordered step list for a track.
///
/// Benefit-granted milestones never consult the status source: their raw
/// status is synthesized from the person's granted flag (Done when set,
/// Void otherwise). For every other step a missing raw status is a fatal
/// [`TunnelError::MissingStatus`].
pub fn build_steps(
    track: Track,
    person: &Person,
    source: &dyn StepStatusSource,
    attempts: &[VerificationAttempt],
    reviews: &[ManualReview],
) -> Result<Vec<Step>> {
    layout(track)
        .iter()
        .enumerate()
        .map(|(position, template)| {
            let raw_status = raw_status_for(template, person, source)?;
            Ok(Step {
                position,
                kind: template.kind,
                tier: template.tier,
                icon: template.icon,
                raw_status,
                status: resolve(raw_status),
                active: false,
                disabled: false,
                attempts: attempts_for(template, attempts),
                reviews: reviews_for(template, reviews),
            })
        })
        .collect()
}

fn raw_status_for(
    template: &StepTemplate,
    person: &Person,
    source: &dyn StepStatusSource,
) -> Result<RawStepStatus> {
    if template.kind == StepKind::BenefitGranted {
        // Milestone steps are derived from the person record itself.
        let granted = template.tier.is_some_and(|tier| person.benefit_granted(tier));
        return Ok(if granted {
            RawStepStatus::Done
        } else {
            RawStepStatus::Void
        });
    }
    source
        .raw_status(template.tier, template.kind)
        .ok_or(TunnelError::MissingStatus {
            tier: template.tier,
            kind: template.kind,
        })
}

fn attempts_for(
    template: &StepTemplate,
    attempts: &[VerificationAttempt],
) -> Vec<VerificationAttempt> {
    attempts
        .iter()
        .filter(|a| template.kind.matches(a.kind) && a.applies_to(template.tier))
        .cloned()
        .collect()
}

fn reviews_for(template: &StepTemplate, reviews: &[ManualReview]) -> Vec<ManualReview> {
    if template.kind != StepKind::BenefitGranted {
        return Vec::new();
    }
    reviews
        .iter()
        .filter(|r| r.tier == template.tier)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_step_counts() {
        assert_eq!(layout(Track::NotEligible).len(), 2);
        assert_eq!(layout(Track::Minor).len(), 6);
        assert_eq!(layout(Track::Adult).len(), 6);
        assert_eq!(layout(Track::MinorToAdult).len(), 10);
    }

    #[test]
    fn test_combined_layout_is_minor_half_then_adult_half() {
        let steps = layout(Track::MinorToAdult);
        assert!(steps[..5].iter().all(|s| s.tier == Some(Tier::Minor)));
        assert!(steps[5..].iter().all(|s| s.tier == Some(Tier::Adult)));
        assert_eq!(steps[4].kind, StepKind::BenefitGranted);
        assert_eq!(steps[5].kind, StepKind::PhoneValidation);
        assert_eq!(steps[9].kind, StepKind::BenefitGranted);
    }

    #[test]
    fn test_single_tier_layouts_end_in_milestone() {
        for track in [Track::Minor, Track::Adult] {
            let steps = layout(track);
            assert_eq!(steps.last().unwrap().kind, StepKind::BenefitGranted);
        }
    }
}
