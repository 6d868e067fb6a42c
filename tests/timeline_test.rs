//! Tests for the merged audit timeline over all five record kinds.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use pass_tunnel::{
    CheckKind, CheckStatus, EmailChange, ImportBatchStatus, LifecycleEvent, LifecycleEventKind,
    ManualReview, Person, ReviewOutcome, Tier, TimelineItem, VerificationAttempt, merge_timeline,
};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn sample_person() -> Person {
    Person::new(42, NaiveDate::from_ymd_opt(2005, 1, 10), at(2021, 2, 1))
}

#[test]
fn test_all_record_kinds_merge_into_one_ordered_view() {
    let person = sample_person();
    let events = [LifecycleEvent {
        kind: LifecycleEventKind::Suspended,
        at: Some(at(2023, 9, 1)),
        comment: Some("fraud review".to_string()),
    }];
    let email_changes = [EmailChange {
        at: Some(at(2022, 5, 1)),
        old_email: "old@example.com".to_string(),
        new_email: "new@example.com".to_string(),
    }];
    let attempts = [VerificationAttempt {
        id: 1,
        kind: CheckKind::IdentityDocument,
        tier: Some(Tier::Minor),
        status: CheckStatus::Ok,
        reason: None,
        reason_codes: Vec::new(),
        created_at: at(2021, 3, 1),
        detail: None,
    }];
    let reviews = [ManualReview {
        id: 2,
        reviewed_at: at(2023, 10, 1),
        tier: Some(Tier::Adult),
        outcome: ReviewOutcome::Approved,
        reason: None,
    }];
    let import_batches = [ImportBatchStatus {
        at: Some(at(2021, 4, 1)),
        label: "created".to_string(),
        detail: None,
    }];

    let timeline = merge_timeline(
        &person,
        &events,
        &email_changes,
        &attempts,
        &reviews,
        &import_batches,
    );

    // five supplied records plus the synthesized account-created entry
    assert_eq!(timeline.len(), 6);
    for pair in timeline.windows(2) {
        assert!(pair[0].event_date() >= pair[1].event_date());
    }
    assert!(matches!(&timeline[0], TimelineItem::Review(_)));
    assert!(matches!(
        timeline.last(),
        Some(TimelineItem::Lifecycle(e)) if e.kind == LifecycleEventKind::AccountCreated
    ));
}

#[test]
fn test_merge_is_idempotent() {
    let person = sample_person();
    let attempts = [VerificationAttempt {
        id: 1,
        kind: CheckKind::ProfileCompletion,
        tier: Some(Tier::Minor),
        status: CheckStatus::Ok,
        reason: None,
        reason_codes: Vec::new(),
        created_at: at(2021, 3, 1),
        detail: None,
    }];
    let first = merge_timeline(&person, &[], &[], &attempts, &[], &[]);
    let second = merge_timeline(&person, &[], &[], &attempts, &[], &[]);
    assert_eq!(first, second);
}
