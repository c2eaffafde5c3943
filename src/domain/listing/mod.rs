//! Listing domain - drafts, persisted listings, the payload codec, and
//! the read-side presentation logic.

pub(crate) mod model;
mod payload;
mod presentation;
mod rotation;

pub use model::{DraftListing, Listing, ListingUpdate, NewListing};
pub use payload::{decode, encode, PayloadError, MAX_TOKEN_LEN};
pub use presentation::{
    partition_by_activity, partition_by_tier, rank_for_display, rotation_window, RotationWindow,
    TierBoard,
};
pub use rotation::RotationTimer;
