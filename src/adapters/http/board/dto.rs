//! HTTP DTOs for the listings API.
//!
//! These types define the JSON request/response structure and serve as
//! the boundary between HTTP and the domain layer.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Tier;
use crate::domain::listing::{DraftListing, Listing, TierBoard};

// ════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════

/// Request to start a checkout for a new listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckoutRequestBody {
    /// The draft listing to encode into the checkout session.
    #[serde(flatten)]
    pub draft: DraftListing,
    /// The tier being purchased.
    pub tier: Tier,
}

/// Tier preselection query parameter for the listing-creation entry
/// point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TierPreselectQuery {
    pub tier: Option<String>,
}

// ════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════

/// A listing as rendered to API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub salary_range: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub tier: Tier,
    /// ISO 8601 creation instant.
    pub created_at: String,
    /// ISO 8601 expiry instant; absolute, so readers never need the
    /// tier catalog.
    pub expires_at: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            title: listing.title,
            company: listing.company,
            location: listing.location,
            job_type: listing.job_type,
            description: listing.description,
            salary_range: listing.salary_range,
            contact_email: listing.contact_email,
            contact_phone: listing.contact_phone,
            tier: listing.tier,
            created_at: listing.created_at.to_rfc3339(),
            expires_at: listing.expires_at.to_rfc3339(),
        }
    }
}

/// The public board, partitioned by tier, newest first within tier.
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub premium: Vec<ListingResponse>,
    pub featured: Vec<ListingResponse>,
    pub basic: Vec<ListingResponse>,
    pub total_active: usize,
}

impl From<TierBoard> for BoardResponse {
    fn from(board: TierBoard) -> Self {
        let total_active = board.total();
        Self {
            premium: board.premium.into_iter().map(Into::into).collect(),
            featured: board.featured.into_iter().map(Into::into).collect(),
            basic: board.basic.into_iter().map(Into::into).collect(),
            total_active,
        }
    }
}

/// Owner dashboard view: the owner's listings split by activity.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerListingsResponse {
    pub active: Vec<ListingResponse>,
    pub expired: Vec<ListingResponse>,
}

/// Response for a started checkout session.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub client_secret: String,
}

/// Catalog response with the tier preselected by the entry point's
/// query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: &'static [crate::domain::catalog::TierProduct],
    pub preselected: Tier,
}

/// Webhook acknowledgment body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
