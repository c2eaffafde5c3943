//! Listing activation engine.
//!
//! Turns a verified payment-completed event into exactly one persisted,
//! time-bounded listing. Each event reaches one of two terminal states:
//! activated or rejected. Redelivery of an already-consumed event is
//! reported as [`ActivationOutcome::AlreadyActivated`] and acknowledged
//! without a second insert - the store's uniqueness constraint on the
//! payment session id is what enforces this under concurrency.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use super::errors::WebhookError;
use super::event::{CheckoutSession, PaymentEvent, PaymentEventType};
use crate::domain::catalog::Tier;
use crate::domain::foundation::ListingId;
use crate::domain::listing::{decode, NewListing, PayloadError};
use crate::ports::{InsertOutcome, ListingStore};

/// Metadata key carrying the encoded draft listing.
pub const METADATA_PAYLOAD_KEY: &str = "listing_payload";

/// Metadata key carrying the purchased tier id.
pub const METADATA_TIER_KEY: &str = "tier";

/// Outcome of processing one verified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// A listing was persisted and is now queryable.
    Activated { listing_id: ListingId },
    /// The payment session was already consumed by an earlier
    /// delivery; no new listing was created.
    AlreadyActivated,
    /// The event type does not create listings; acknowledged without
    /// action.
    Ignored { event_type: String },
}

/// The activation engine. Holds no listing state of its own; after the
/// insert call returns, the store is the sole owner.
pub struct ActivationEngine {
    store: Arc<dyn ListingStore>,
}

impl ActivationEngine {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// Processes a verified event observed at `now`.
    ///
    /// Policy:
    /// 1. Only `checkout.session.completed` creates listings; anything
    ///    else is acknowledged without action.
    /// 2. Missing payload token ⇒ `MissingPayload` (a paid transaction
    ///    with no resulting listing - logged for investigation).
    /// 3. Undecodable payload ⇒ `InvalidPayload`.
    /// 4. Duration comes from the tier catalog, with a 30-day default
    ///    for unrecognized tier ids.
    /// 5. `created_at = now`, `expires_at = now + duration`; both stored
    ///    as absolute instants derived from the same clock read, so the
    ///    row's lifetime is exactly the tier duration.
    /// 6. Store failure ⇒ `PersistenceError`; the event is not consumed
    ///    and the transport's redelivery will retry.
    pub async fn activate(
        &self,
        event: &PaymentEvent,
        now: DateTime<Utc>,
    ) -> Result<ActivationOutcome, WebhookError> {
        if event.parsed_type() != PaymentEventType::CheckoutSessionCompleted {
            return Ok(ActivationOutcome::Ignored {
                event_type: event.event_type.clone(),
            });
        }

        let session: CheckoutSession = event
            .deserialize_object()
            .map_err(|e| WebhookError::ParseError(e.to_string()))?;

        let token = session.metadata.get(METADATA_PAYLOAD_KEY);
        if token.is_none() {
            warn!(event_id = %event.id, session_id = %session.id,
                "completed checkout carried no listing payload");
            return Err(WebhookError::MissingPayload);
        }

        let draft = decode(token.map(String::as_str)).map_err(|e| match e {
            PayloadError::Missing => WebhookError::MissingPayload,
            other => WebhookError::InvalidPayload(other.to_string()),
        })?;

        let tier_id = session.metadata.get(METADATA_TIER_KEY).map(String::as_str);
        let tier = match tier_id.and_then(Tier::parse) {
            Some(tier) => tier,
            None => {
                warn!(event_id = %event.id, tier = ?tier_id,
                    "unrecognized tier on paid checkout, defaulting to basic");
                Tier::Basic
            }
        };
        let duration_days = Tier::duration_days_for(tier_id);

        let new_listing = NewListing {
            draft,
            tier,
            created_at: now,
            expires_at: now + Duration::days(duration_days),
            payment_session_id: session.id.clone(),
        };

        match self.store.insert(new_listing).await {
            Ok(InsertOutcome::Inserted(listing_id)) => {
                info!(event_id = %event.id, %listing_id, %tier, "listing activated");
                Ok(ActivationOutcome::Activated { listing_id })
            }
            Ok(InsertOutcome::Duplicate) => {
                info!(event_id = %event.id, session_id = %session.id,
                    "duplicate delivery, listing already activated");
                Ok(ActivationOutcome::AlreadyActivated)
            }
            Err(e) => Err(WebhookError::PersistenceError(e.to_string())),
        }
    }
}
