//! Tier catalog - static registry of purchasable listing tiers.
//!
//! Tiers are defined at process start and never persisted per-instance;
//! listings reference them by id. Duration lookups happen at activation
//! time, so later catalog changes never retroactively alter existing
//! listings.

mod products;
mod tier;

pub use products::{lookup, product_for, TierProduct, PRODUCTS};
pub use tier::Tier;
