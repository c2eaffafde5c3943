//! Purchasable tier products.
//!
//! Pure data; the only behavior is lookup by tier id.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::tier::Tier;

/// A purchasable listing product as shown on the pricing page.
#[derive(Debug, Clone, Serialize)]
pub struct TierProduct {
    /// Stable product identifier (e.g. "premium-listing").
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Marketing description.
    pub description: &'static str,
    /// Price in minor currency units (cents).
    pub price_in_cents: u32,
    /// The tier this product purchases.
    pub tier: Tier,
    /// How long the listing stays active.
    pub duration_days: i64,
    /// Ordered feature list for display.
    pub features: &'static [&'static str],
}

/// The full product catalog, built once at process start.
pub static PRODUCTS: Lazy<Vec<TierProduct>> = Lazy::new(|| {
    vec![
        TierProduct {
            id: "basic-listing",
            name: "Basic Listing",
            description: "Perfect for small businesses and one-time gigs",
            price_in_cents: 1000,
            tier: Tier::Basic,
            duration_days: Tier::Basic.duration_days(),
            features: &[
                "30-day listing",
                "Standard placement",
                "Basic job details",
                "Email notifications",
            ],
        },
        TierProduct {
            id: "featured-listing",
            name: "Featured Listing",
            description: "Get more visibility with featured placement",
            price_in_cents: 7900,
            tier: Tier::Featured,
            duration_days: Tier::Featured.duration_days(),
            features: &[
                "45-day listing",
                "Featured placement",
                "Highlighted in search",
                "Priority support",
                "Social media share",
            ],
        },
        TierProduct {
            id: "premium-listing",
            name: "Premium Listing",
            description: "Maximum exposure for your job posting",
            price_in_cents: 14900,
            tier: Tier::Premium,
            duration_days: Tier::Premium.duration_days(),
            features: &[
                "60-day listing",
                "Top placement",
                "Homepage featured",
                "Dedicated support",
                "Social media promotion",
                "Email blast to subscribers",
            ],
        },
    ]
});

/// Looks up a product by tier id string (e.g. "premium").
///
/// Returns `None` for unrecognized tier ids.
pub fn lookup(tier_id: &str) -> Option<&'static TierProduct> {
    let tier = Tier::parse(tier_id)?;
    PRODUCTS.iter().find(|p| p.tier == tier)
}

/// Returns the product for a known tier.
pub fn product_for(tier: Tier) -> &'static TierProduct {
    PRODUCTS
        .iter()
        .find(|p| p.tier == tier)
        .expect("catalog contains every tier")
}
