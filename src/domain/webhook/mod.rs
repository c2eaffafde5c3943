//! Payment webhook handling - event envelope, signature verification,
//! and the listing activation engine.
//!
//! This is the trust boundary of the system: nothing past the verifier
//! trusts client-supplied data for monetary correctness. The metadata
//! only carries what to create, never how much was paid.

mod activation;
mod errors;
mod event;
mod verifier;

pub use activation::{ActivationEngine, ActivationOutcome, METADATA_PAYLOAD_KEY, METADATA_TIER_KEY};
pub use errors::WebhookError;
pub use event::{CheckoutSession, PaymentEvent, PaymentEventData, PaymentEventType};
pub use verifier::{sign_payload, SignatureHeader, WebhookVerifier};
