use chrono::{NaiveDate, TimeZone, Utc};
use log::info;
use pass_tunnel::{
    CheckKind, CheckStatus, Person, RawStepStatus, ReasonCode, Result, StepKind, Tier,
    TunnelConfig, VerificationAttempt, build_tunnel, duplicate_reference, merge_timeline,
};
use std::collections::HashMap;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let now = Utc::now();
    let created_at = Utc.with_ymd_and_hms(2021, 3, 15, 9, 30, 0).unwrap();

    // A person who signed up as a minor and has since turned 18
    let person = Person::new(
        4821,
        NaiveDate::from_ymd_opt(2004, 7, 2),
        created_at,
    );

    let attempts = vec![
        VerificationAttempt {
            id: 1,
            kind: CheckKind::IdentityDocument,
            tier: Some(Tier::Minor),
            status: CheckStatus::Ok,
            reason: None,
            reason_codes: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2021, 4, 2, 14, 0, 0).unwrap(),
            detail: None,
        },
        VerificationAttempt {
            id: 2,
            kind: CheckKind::IdentityDocument,
            tier: Some(Tier::Adult),
            status: CheckStatus::Suspicious,
            reason: Some("numéro de pièce déjà utilisé, cf compte 3377".to_string()),
            reason_codes: vec![ReasonCode::DuplicateIdDocumentNumber],
            created_at: Utc.with_ymd_and_hms(2022, 8, 10, 11, 0, 0).unwrap(),
            detail: None,
        },
    ];

    let mut statuses: HashMap<(Option<Tier>, StepKind), RawStepStatus> = HashMap::new();
    for (tier, kind, status) in [
        (Tier::Minor, StepKind::EmailValidation, RawStepStatus::Done),
        (Tier::Minor, StepKind::ProfileCompletion, RawStepStatus::Done),
        (Tier::Minor, StepKind::IdentityCheck, RawStepStatus::Done),
        (Tier::Minor, StepKind::HonorStatement, RawStepStatus::Done),
        (Tier::Adult, StepKind::PhoneValidation, RawStepStatus::Done),
        (Tier::Adult, StepKind::ProfileCompletion, RawStepStatus::Done),
        (Tier::Adult, StepKind::IdentityCheck, RawStepStatus::Flagged),
        (Tier::Adult, StepKind::HonorStatement, RawStepStatus::ToDo),
    ] {
        statuses.insert((Some(tier), kind), status);
    }

    info!("Computing tunnel for person {}", person.id);
    let tunnel = build_tunnel(&person, &attempts, &[], &statuses, now, &TunnelConfig::new())?;
    info!(
        "Track: {}, {} steps, progress {:.0}%",
        tunnel.track,
        tunnel.steps.len(),
        tunnel.progress
    );
    println!("{}", serde_json::to_string_pretty(&tunnel).unwrap());

    if let Some(reference) = duplicate_reference(&tunnel, &attempts) {
        info!("Possible duplicate of account {reference}");
    }

    let timeline = merge_timeline(&person, &[], &[], &attempts, &[], &[]);
    info!("Timeline entries: {}", timeline.len());
    println!("{}", serde_json::to_string_pretty(&timeline).unwrap());

    Ok(())
}
