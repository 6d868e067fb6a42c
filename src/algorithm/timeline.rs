//! Audit timeline merge
//!
//! Merges every verification-related historical record kind into one
//! reverse-chronological view. The five record shapes are unified behind
//! [`TimelineItem`], so the merge and sort never inspect the payloads.

use crate::models::history::{
    EmailChange, ImportBatchStatus, LifecycleEvent, LifecycleEventKind, ManualReview,
    TimelineItem, VerificationAttempt,
};
use crate::models::person::Person;

/// Merge a person's historical records into one timeline, most recent first.
///
/// When no account-created lifecycle event exists, one is synthesized at
/// the account-creation timestamp. Undated records sort last. The sort is
/// stable, so equal dates keep their collection order across runs.
#[must_use]
pub fn merge_timeline(
    person: &Person,
    events: &[LifecycleEvent],
    email_changes: &[EmailChange],
    attempts: &[VerificationAttempt],
    reviews: &[ManualReview],
    import_batches: &[ImportBatchStatus],
) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = Vec::with_capacity(
        events.len()
            + email_changes.len()
            + attempts.len()
            + reviews.len()
            + import_batches.len()
            + 1,
    );

    items.extend(events.iter().cloned().map(TimelineItem::Lifecycle));
    if !events
        .iter()
        .any(|e| e.kind == LifecycleEventKind::AccountCreated)
    {
        items.push(TimelineItem::Lifecycle(LifecycleEvent::account_created(
            person.created_at,
        )));
    }
    items.extend(email_changes.iter().cloned().map(TimelineItem::EmailChange));
    items.extend(attempts.iter().cloned().map(TimelineItem::Verification));
    items.extend(reviews.iter().cloned().map(TimelineItem::Review));
    items.extend(import_batches.iter().cloned().map(TimelineItem::ImportBatch));

    items.sort_by(|a, b| b.event_date().cmp(&a.event_date()));
    items
}
