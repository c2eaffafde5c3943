//! Payment provider webhook event types.
//!
//! Only the fields this service processes are captured; everything
//! else in the provider's event schema is ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A payment provider webhook event (simplified envelope).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentEvent {
    /// Provider-assigned event id (evt_xxx format).
    pub id: String,

    /// Declared event type (e.g. "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Unix timestamp at which the provider created the event.
    pub created: i64,

    /// Event-specific data.
    pub data: PaymentEventData,

    /// Whether this is a live mode event.
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentEventData {
    /// The object that triggered the event, polymorphic per event type.
    pub object: serde_json::Value,
}

impl PaymentEvent {
    /// Parse the declared type into a known variant.
    pub fn parsed_type(&self) -> PaymentEventType {
        PaymentEventType::from_type_str(&self.event_type)
    }

    /// Deserializes the data object as the given type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Event types this service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentEventType {
    /// A checkout completed; the only type that creates listings.
    CheckoutSessionCompleted,
    /// A checkout session expired unpaid. Recognized and acknowledged,
    /// nothing to do (the draft was never persisted).
    CheckoutSessionExpired,
    /// Anything else (refunds, disputes, ...) - acknowledged without
    /// action, out of scope for listing creation.
    Unknown,
}

impl PaymentEventType {
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            "checkout.session.expired" => Self::CheckoutSessionExpired,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckoutSessionCompleted => "checkout.session.completed",
            Self::CheckoutSessionExpired => "checkout.session.expired",
            Self::Unknown => "unknown",
        }
    }
}

/// The checkout session object carried by a completion event.
///
/// The metadata map is where the encoded draft listing and the chosen
/// tier id travel; the session id doubles as the activation
/// idempotency key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSession {
    /// Provider-assigned session id (cs_xxx format).
    pub id: String,

    /// Opaque key/value metadata attached at session creation.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// Builds a checkout.session.completed event wrapping the given
    /// session object.
    pub fn completed_event(id: &str, session: serde_json::Value) -> PaymentEvent {
        PaymentEvent {
            id: id.to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: chrono::Utc::now().timestamp(),
            data: PaymentEventData { object: session },
            livemode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_minimal_event() {
        let json = r#"{
            "id": "evt_1234567890",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": { "object": {} },
            "livemode": false
        }"#;

        let event: PaymentEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "evt_1234567890");
        assert_eq!(
            event.parsed_type(),
            PaymentEventType::CheckoutSessionCompleted
        );
        assert!(!event.livemode);
    }

    #[test]
    fn unknown_event_types_parse_as_unknown() {
        assert_eq!(
            PaymentEventType::from_type_str("charge.refunded"),
            PaymentEventType::Unknown
        );
        assert_eq!(
            PaymentEventType::from_type_str(""),
            PaymentEventType::Unknown
        );
    }

    #[test]
    fn recognized_types_roundtrip_through_as_str() {
        for t in [
            PaymentEventType::CheckoutSessionCompleted,
            PaymentEventType::CheckoutSessionExpired,
        ] {
            assert_eq!(PaymentEventType::from_type_str(t.as_str()), t);
        }
    }

    #[test]
    fn session_object_deserializes_with_metadata() {
        let event = test_support::completed_event(
            "evt_meta",
            json!({
                "id": "cs_test_abc123",
                "metadata": { "tier": "premium", "listing_payload": "{}" }
            }),
        );

        let session: CheckoutSession = event.deserialize_object().unwrap();

        assert_eq!(session.id, "cs_test_abc123");
        assert_eq!(session.metadata.get("tier").map(String::as_str), Some("premium"));
    }

    #[test]
    fn session_metadata_defaults_to_empty() {
        let event = test_support::completed_event("evt_bare", json!({ "id": "cs_bare" }));

        let session: CheckoutSession = event.deserialize_object().unwrap();

        assert!(session.metadata.is_empty());
    }

    #[test]
    fn deserialize_object_fails_for_wrong_shape() {
        let event = test_support::completed_event("evt_bad", json!("not an object"));

        let result: Result<CheckoutSession, _> = event.deserialize_object();

        assert!(result.is_err());
    }
}
