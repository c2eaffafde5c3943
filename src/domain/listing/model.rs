//! Listing aggregate and the transient draft that precedes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Tier;
use crate::domain::foundation::{ListingId, OwnerId};

/// A job listing as entered by a user before payment.
///
/// Never persisted; it exists only long enough to be encoded into a
/// checkout-session token and decoded again once payment completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Owning user, captured before checkout.
    pub owner_id: OwnerId,
}

/// A persisted, publicly queryable listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub salary_range: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub tier: Tier,
    pub owner_id: OwnerId,
    /// The activation instant.
    pub created_at: DateTime<Utc>,
    /// Absolute instant; readers never need the tier catalog.
    pub expires_at: DateTime<Utc>,
}

impl Listing {
    /// A listing is active strictly before its expiry; the boundary
    /// instant counts as expired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Fields handed to the store for a single activation insert.
///
/// `created_at` and `expires_at` are both derived from the same
/// activation instant, so the stored row satisfies
/// `expires_at == created_at + tier duration` exactly.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub draft: DraftListing,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Payment session that paid for this listing. The store enforces
    /// uniqueness on it, which is what makes activation idempotent
    /// under webhook redelivery.
    pub payment_session_id: String,
}

/// Owner-editable descriptive fields. Tier and expiry are immutable
/// after activation and deliberately absent here.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingUpdate {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    /// Builds a draft with sensible defaults for tests.
    pub fn draft() -> DraftListing {
        DraftListing {
            title: "Line Cook".to_string(),
            company: "Midtown Diner".to_string(),
            location: "Oklahoma City, OK".to_string(),
            job_type: "Full-time".to_string(),
            description: "Prep and cook breakfast service.".to_string(),
            salary_range: Some("$16-$19/hr".to_string()),
            contact_email: "jobs@midtowndiner.example".to_string(),
            contact_phone: None,
            owner_id: OwnerId::from_uuid(Uuid::new_v4()),
        }
    }

    /// Builds a persisted listing from a draft, expiring `days` after `created_at`.
    pub fn listing(tier: Tier, created_at: DateTime<Utc>, days: i64) -> Listing {
        let d = draft();
        Listing {
            id: ListingId::generate(),
            title: d.title,
            company: d.company,
            location: d.location,
            job_type: d.job_type,
            description: d.description,
            salary_range: d.salary_range,
            contact_email: d.contact_email,
            contact_phone: d.contact_phone,
            tier,
            owner_id: d.owner_id,
            created_at,
            expires_at: created_at + Duration::days(days),
        }
    }
}
