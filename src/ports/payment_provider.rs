//! PaymentProvider port - checkout session creation.
//!
//! The provider's hosted payment UI and its session records are
//! external collaborators; this port only covers attaching the encoded
//! draft to a new session. The price actually charged is established
//! by the provider's own session record, never by client-supplied
//! metadata.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::Tier;

/// Request to open a checkout session for a listing purchase.
#[derive(Debug, Clone)]
pub struct CreateCheckoutRequest {
    /// Catalog product being purchased (e.g. "featured-listing").
    pub product_id: String,
    /// The tier the product purchases.
    pub tier: Tier,
    /// Encoded draft listing, attached as opaque session metadata.
    pub payload_token: String,
}

/// Reference to a provider-side checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSessionRef {
    /// Provider session id (cs_xxx); later the activation idempotency
    /// key.
    pub session_id: String,
    /// Client secret for mounting the provider's embedded checkout.
    pub client_secret: String,
}

/// Failures reported by the payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Invalid checkout request: {0}")]
    InvalidRequest(String),

    #[error("Payment provider error: {0}")]
    Provider(String),
}

/// Port for creating checkout sessions at the payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates a checkout session carrying the payload token and tier
    /// id in its metadata.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSessionRef, PaymentError>;
}
