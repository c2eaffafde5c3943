//! Webhook error taxonomy with HTTP status mapping and retryability
//! semantics.

use http::StatusCode;
use thiserror::Error;

/// Errors that occur while handling a payment notification.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature verification failed; the sender is untrusted.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Event is older than the acceptable replay window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse the signature header or the event envelope.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The completion event carried no listing payload token. Implies a
    /// paid transaction with no resulting listing; logged for manual
    /// investigation.
    #[error("Missing listing payload in event metadata")]
    MissingPayload,

    /// The payload token failed to decode into a draft listing.
    #[error("Invalid listing payload: {0}")]
    InvalidPayload(String),

    /// The listing store rejected or failed the insert. The event is
    /// not consumed; the transport's redelivery will retry.
    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl WebhookError {
    /// Whether the payment provider should redeliver this event.
    ///
    /// Only persistence failures benefit from a retry; signature and
    /// payload failures are terminal until the sender changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WebhookError::PersistenceError(_))
    }

    /// Maps the error to the outward HTTP status.
    ///
    /// The status drives the provider's retry behavior: 4xx stops
    /// redelivery, 5xx triggers it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSignature
            | WebhookError::TimestampOutOfRange
            | WebhookError::InvalidTimestamp
            | WebhookError::ParseError(_)
            | WebhookError::MissingPayload
            | WebhookError::InvalidPayload(_) => StatusCode::BAD_REQUEST,

            WebhookError::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // Retryability Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn persistence_error_is_retryable() {
        assert!(WebhookError::PersistenceError("connection refused".into()).is_retryable());
    }

    #[test]
    fn trust_and_payload_failures_are_not_retryable() {
        assert!(!WebhookError::InvalidSignature.is_retryable());
        assert!(!WebhookError::TimestampOutOfRange.is_retryable());
        assert!(!WebhookError::ParseError("bad header".into()).is_retryable());
        assert!(!WebhookError::MissingPayload.is_retryable());
        assert!(!WebhookError::InvalidPayload("truncated".into()).is_retryable());
    }

    // ══════════════════════════════════════════════════════════════
    // Status Code Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn signature_failures_map_to_bad_request() {
        assert_eq!(
            WebhookError::InvalidSignature.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::TimestampOutOfRange.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::InvalidTimestamp.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn payload_failures_map_to_bad_request() {
        assert_eq!(
            WebhookError::MissingPayload.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::InvalidPayload("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::ParseError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn persistence_failure_maps_to_internal_error() {
        assert_eq!(
            WebhookError::PersistenceError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            WebhookError::InvalidSignature.to_string(),
            "Invalid signature"
        );
        assert_eq!(
            WebhookError::MissingPayload.to_string(),
            "Missing listing payload in event metadata"
        );
    }
}
