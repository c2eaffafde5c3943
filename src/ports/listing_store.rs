//! ListingStore port - gateway to the persistent listing store.
//!
//! The store is the sole owner of persisted listings and the only
//! shared mutable resource in the system. Duplicate-insert avoidance
//! is delegated to it: implementations enforce a uniqueness constraint
//! on the payment session id, so concurrent redeliveries of the same
//! completion event race safely (first insert wins, the rest observe
//! `Duplicate`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, ListingId, OwnerId};
use crate::domain::listing::{Listing, ListingUpdate, NewListing};

/// Result of attempting an activation insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new listing row was created.
    Inserted(ListingId),
    /// The payment session id was already present; nothing written.
    Duplicate,
}

/// Port for the persistent listing store.
///
/// Calls must have bounded timeouts at the adapter level; a timed-out
/// call is reported as a failure and never retried internally - the
/// webhook transport owns retry via redelivery.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Inserts a newly activated listing.
    ///
    /// `created_at` and `expires_at` are supplied by the activation
    /// engine from a single clock read. Returns
    /// [`InsertOutcome::Duplicate`] when the payment session id has
    /// already been consumed by an earlier delivery.
    async fn insert(&self, listing: NewListing) -> Result<InsertOutcome, DomainError>;

    /// Updates descriptive fields of an owner's listing. Tier and
    /// expiry are immutable post-activation and not part of the update.
    async fn update(
        &self,
        id: ListingId,
        owner_id: OwnerId,
        update: ListingUpdate,
    ) -> Result<(), DomainError>;

    /// Deletes an owner's listing.
    async fn delete(&self, id: ListingId, owner_id: OwnerId) -> Result<(), DomainError>;

    /// All listings belonging to an owner, newest first, regardless of
    /// expiry.
    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Listing>, DomainError>;

    /// Listings still active at `now` (`expires_at > now`), newest
    /// first.
    async fn find_active(&self, now: DateTime<Utc>) -> Result<Vec<Listing>, DomainError>;
}
