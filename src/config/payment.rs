//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration.
///
/// Only the webhook signing secret lives here: checkout session
/// creation happens behind the `PaymentProvider` port and the hosted
/// payment UI is an external collaborator. The secret is server-held
/// and never exposed to clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Webhook signing secret from the payment provider dashboard
    pub webhook_secret: String,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_WEBHOOK_SECRET"));
        }
        if !self.webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidWebhookSecret);
        }
        Ok(())
    }
}
