//! Tunnel computation pipeline
//!
//! Glues the classifier, the sequence builder, the activation scan and the
//! progress value into the single view object handed to the presentation
//! layer. Pure and synchronous: all inputs are immutable snapshots fetched
//! by the caller.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::algorithm::activation::{mark_active_step, progress};
use crate::algorithm::sequence::{StepStatusSource, build_steps};
use crate::algorithm::track::classify;
use crate::config::TunnelConfig;
use crate::error::Result;
use crate::models::history::{ManualReview, VerificationAttempt};
use crate::models::person::Person;
use crate::models::step::Tunnel;
use crate::models::types::{Tier, Track};

/// Tiers for which at least one verification attempt exists.
#[must_use]
pub fn attempted_tiers(attempts: &[VerificationAttempt]) -> HashSet<Tier> {
    attempts.iter().filter_map(|a| a.tier).collect()
}

/// Compute the full verification tunnel for a person.
///
/// Not-eligible tunnels carry their two fixed steps as built: they are
/// never scanned for activation and their progress stays at zero.
pub fn build_tunnel(
    person: &Person,
    attempts: &[VerificationAttempt],
    reviews: &[ManualReview],
    source: &dyn StepStatusSource,
    now: DateTime<Utc>,
    config: &TunnelConfig,
) -> Result<Tunnel> {
    let track = classify(person, &attempted_tiers(attempts), now, config)?;
    let mut steps = build_steps(track, person, source, attempts, reviews)?;

    let progress = if track == Track::NotEligible {
        0.0
    } else {
        let active = mark_active_step(&mut steps);
        log::debug!(
            "person {}: track {track}, {} steps, active step {active:?}",
            person.id,
            steps.len()
        );
        progress(&steps)
    };

    Ok(Tunnel {
        track,
        steps,
        progress,
    })
}
