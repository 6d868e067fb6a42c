//! Track classification
//!
//! Decides which verification track applies to a person from their birth
//! date, their age when the account was created, and their age now.
//! Eligibility is anchored to the age at signup: a person already past the
//! adult threshold when they created their account never gets a track.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::TunnelConfig;
use crate::error::{Result, TunnelError};
use crate::models::person::Person;
use crate::models::types::{Tier, Track};

/// Classify the verification track for a person.
///
/// `attempted_tiers` is the set of tiers for which any verification
/// attempt exists; it is used only to detect inconsistent histories
/// (adult-tier attempts for a person still under the threshold), never to
/// choose a track.
///
/// Rule order matters: the minor-to-adult transition is checked before the
/// adult-at-signup rule, since a person can satisfy both "under the
/// threshold at creation" and "at the threshold now" — the transition
/// state takes priority.
pub fn classify(
    person: &Person,
    attempted_tiers: &HashSet<Tier>,
    now: DateTime<Utc>,
    config: &TunnelConfig,
) -> Result<Track> {
    let Some(birth_date) = person.birth_date else {
        log::debug!("person {} has no birth date, not eligible", person.id);
        return Ok(Track::NotEligible);
    };

    let age_now = person.age_at(now.date_naive()).ok_or_else(|| {
        TunnelError::UnknownTierCombination(format!(
            "person {}: birth date {birth_date} is in the future",
            person.id
        ))
    })?;
    let age_at_creation = person.age_at_creation().ok_or_else(|| {
        TunnelError::UnknownTierCombination(format!(
            "person {}: birth date {birth_date} is after account creation",
            person.id
        ))
    })?;

    let track = if age_now < config.adult_age {
        if attempted_tiers.contains(&Tier::Adult) {
            return Err(TunnelError::UnknownTierCombination(format!(
                "person {}: adult-tier attempts on file at age {age_now}",
                person.id
            )));
        }
        Track::Minor
    } else if age_at_creation < config.adult_age {
        Track::MinorToAdult
    } else if age_at_creation == config.adult_age {
        Track::Adult
    } else {
        Track::NotEligible
    };

    log::debug!(
        "person {} classified as {track} (age at creation {age_at_creation}, age now {age_now})",
        person.id
    );
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn person(birth: Option<NaiveDate>, created: NaiveDate) -> Person {
        Person::new(
            1,
            birth,
            Utc.from_utc_datetime(&created.and_hms_opt(12, 0, 0).unwrap()),
        )
    }

    fn at(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unknown_birth_date_is_not_eligible() {
        let p = person(None, ymd(2023, 5, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2024, 5, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::NotEligible));
    }

    #[test]
    fn test_minor_now_is_minor_track() {
        // 16 at creation, still 16 now
        let p = person(Some(ymd(2008, 1, 10)), ymd(2024, 2, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2024, 6, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::Minor));
    }

    #[test]
    fn test_aged_into_adult_tier_is_transition_track() {
        // 16 at creation, 19 now
        let p = person(Some(ymd(2005, 1, 10)), ymd(2021, 2, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2024, 6, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::MinorToAdult));
    }

    #[test]
    fn test_transition_checked_before_adult_at_signup() {
        // 17 at creation, exactly 18 now: both "under threshold at creation"
        // and "at threshold now" hold, the transition wins
        let p = person(Some(ymd(2006, 3, 1)), ymd(2023, 9, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2024, 4, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::MinorToAdult));
    }

    #[test]
    fn test_exactly_adult_at_signup_is_adult_track() {
        let p = person(Some(ymd(2005, 1, 10)), ymd(2023, 2, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2023, 6, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::Adult));
    }

    #[test]
    fn test_too_old_at_signup_is_not_eligible() {
        // 19 at creation: never gets a track
        let p = person(Some(ymd(2004, 1, 10)), ymd(2023, 2, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2024, 6, 1)), &TunnelConfig::new());
        assert_eq!(track, Ok(Track::NotEligible));
    }

    #[test]
    fn test_adult_attempts_for_minor_is_rejected() {
        let p = person(Some(ymd(2010, 1, 10)), ymd(2024, 2, 1));
        let tiers: HashSet<Tier> = [Tier::Adult].into_iter().collect();
        let track = classify(&p, &tiers, at(ymd(2024, 6, 1)), &TunnelConfig::new());
        assert!(matches!(
            track,
            Err(TunnelError::UnknownTierCombination(_))
        ));
    }

    #[test]
    fn test_birth_date_after_creation_is_rejected() {
        let p = person(Some(ymd(2025, 1, 10)), ymd(2024, 2, 1));
        let track = classify(&p, &HashSet::new(), at(ymd(2025, 6, 1)), &TunnelConfig::new());
        assert!(matches!(
            track,
            Err(TunnelError::UnknownTierCombination(_))
        ));
    }
}
