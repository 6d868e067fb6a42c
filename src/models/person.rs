//! Person entity model
//!
//! The person applying for the pass. Owned by the identity subsystem and
//! read-only to this engine; only the attributes the tunnel computation
//! needs are carried here.

use crate::models::types::Tier;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a pass applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Person identifier
    pub id: u64,
    /// Birth date, unknown until the profile is completed
    pub birth_date: Option<NaiveDate>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Whether the minor-tier benefit has already been granted
    pub minor_benefit_granted: bool,
    /// Whether the adult-tier benefit has already been granted
    pub adult_benefit_granted: bool,
}

impl Person {
    /// Create a person with no benefit granted yet.
    #[must_use]
    pub fn new(id: u64, birth_date: Option<NaiveDate>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            birth_date,
            created_at,
            minor_benefit_granted: false,
            adult_benefit_granted: false,
        }
    }

    /// Age in whole years at the given date, if the birth date is known
    /// and not later than the date.
    #[must_use]
    pub fn age_at(&self, date: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|birth| date.years_since(birth))
    }

    /// Age in whole years at account creation.
    #[must_use]
    pub fn age_at_creation(&self) -> Option<u32> {
        self.age_at(self.created_at.date_naive())
    }

    /// Whether the benefit for the given tier has been granted.
    #[must_use]
    pub const fn benefit_granted(&self, tier: Tier) -> bool {
        match tier {
            Tier::Minor => self.minor_benefit_granted,
            Tier::Adult => self.adult_benefit_granted,
        }
    }
}
