//! Duplicate identity detection
//!
//! Scans a person's verification attempts for duplicate-identity flags
//! and extracts a referenced account identifier from the reviewer's
//! free-text note. The extraction is best-effort prose matching, not a
//! guaranteed lookup: it is kept behind this module so it can be replaced
//! by a structured reference field without touching the rest of the
//! engine.

use itertools::Itertools;

use crate::models::history::VerificationAttempt;
use crate::models::step::Tunnel;
use crate::models::types::Tier;

// Tier groups are visited in a fixed order so repeated runs over the same
// input return the same reference.
const TIER_SCAN_ORDER: [Option<Tier>; 3] = [Some(Tier::Minor), Some(Tier::Adult), None];

/// Find a referenced duplicate account identifier, gated on relevance.
///
/// Only scans when the tunnel's identity-check step has not resolved to
/// success and prior verification history exists; a cleared account must
/// not resurface stale duplicate flags.
#[must_use]
pub fn duplicate_reference(tunnel: &Tunnel, attempts: &[VerificationAttempt]) -> Option<String> {
    if attempts.is_empty() || !tunnel.identity_check_unresolved() {
        return None;
    }
    find_duplicate_reference(attempts)
}

/// Scan verification attempts for a duplicate-identity flag and extract
/// the account identifier mentioned in its reason text.
///
/// Attempts are grouped per tier and each group is scanned most recent
/// first; the first extracted identifier wins. Attempts whose note does
/// not match the pattern are simply skipped.
#[must_use]
pub fn find_duplicate_reference(attempts: &[VerificationAttempt]) -> Option<String> {
    let groups = attempts.iter().map(|a| (a.tier, a)).into_group_map();

    for tier in TIER_SCAN_ORDER {
        let Some(group) = groups.get(&tier) else {
            continue;
        };
        let reference = group
            .iter()
            .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
            .filter(|a| a.reason_codes.iter().any(|c| c.is_duplicate_flag()))
            .filter_map(|a| a.reason.as_deref())
            .filter(|reason| !reason.is_empty())
            .find_map(extract_trailing_id);
        if let Some(reference) = reference {
            log::debug!("duplicate reference {reference} found in tier {tier:?} attempts");
            return Some(reference);
        }
    }
    None
}

/// Extract a trailing run of digits preceded by whitespace, ignoring any
/// trailing non-digit noise ("voir compte 48213." yields "48213").
fn extract_trailing_id(reason: &str) -> Option<String> {
    let mut chars: Vec<(usize, char)> = reason.char_indices().collect();

    while matches!(chars.last(), Some((_, c)) if !c.is_ascii_digit()) {
        chars.pop();
    }
    let &(last, _) = chars.last()?;
    let end = last + 1;

    let mut start = end;
    while matches!(chars.last(), Some((_, c)) if c.is_ascii_digit()) {
        start = chars.last().map(|&(i, _)| i)?;
        chars.pop();
    }

    match chars.last() {
        Some(&(_, c)) if c.is_whitespace() => Some(reason[start..end].to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_trailing_digits() {
        assert_eq!(
            extract_trailing_id("doublon, voir compte 48213"),
            Some("48213".to_string())
        );
    }

    #[test]
    fn test_ignores_trailing_noise() {
        assert_eq!(
            extract_trailing_id("cf compte 777."),
            Some("777".to_string())
        );
        assert_eq!(
            extract_trailing_id("duplicate of 123 (confirmed)"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_requires_preceding_whitespace() {
        assert_eq!(extract_trailing_id("compte48213"), None);
        assert_eq!(extract_trailing_id("48213"), None);
    }

    #[test]
    fn test_no_digits_yields_nothing() {
        assert_eq!(extract_trailing_id("no reference here"), None);
        assert_eq!(extract_trailing_id(""), None);
    }

    #[test]
    fn test_non_ascii_notes_are_handled() {
        assert_eq!(
            extract_trailing_id("déjà vérifié 9042"),
            Some("9042".to_string())
        );
        assert_eq!(extract_trailing_id("déjà vérifié•9042"), None);
    }
}
