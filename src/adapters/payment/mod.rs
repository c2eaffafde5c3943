//! Payment adapter.
//!
//! Checkout sessions are opened against the provider's hosted
//! checkout; deployments wire a concrete client here. The default
//! wiring is `UnconfiguredPaymentProvider`, which keeps the checkout
//! endpoint mounted but rejects every request until a provider is
//! configured. Webhook processing is independent of this adapter: a
//! correctly signed event activates a listing regardless of how the
//! session was opened.

use async_trait::async_trait;

use crate::ports::{CheckoutSessionRef, CreateCheckoutRequest, PaymentError, PaymentProvider};

/// Placeholder provider for deployments without checkout credentials.
pub struct UnconfiguredPaymentProvider;

#[async_trait]
impl PaymentProvider for UnconfiguredPaymentProvider {
    async fn create_checkout_session(
        &self,
        _request: CreateCheckoutRequest,
    ) -> Result<CheckoutSessionRef, PaymentError> {
        Err(PaymentError::Provider(
            "no payment provider configured".to_string(),
        ))
    }
}
