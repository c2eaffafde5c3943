//! Payload codec - carries a draft listing through checkout as opaque
//! session metadata.
//!
//! The encoded token rides in a single metadata value on the payment
//! provider's checkout session, which caps values at 500 characters.
//! Encoding fails fast when the limit would be exceeded; silent
//! truncation would corrupt the decode after a customer has paid.

use thiserror::Error;

use super::model::DraftListing;

/// Maximum length of the encoded token, imposed by the transport's
/// metadata value limit.
pub const MAX_TOKEN_LEN: usize = 500;

/// Failures of the payload codec.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The draft does not fit within the transport's metadata limit.
    #[error("Encoded payload is {actual} chars, limit is {limit}")]
    TooLarge { actual: usize, limit: usize },

    /// The event metadata carried no payload token at all.
    #[error("Payload token missing from event metadata")]
    Missing,

    /// The token is not valid JSON or fails structural validation.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Serialization failed. Drafts are plain data, so this indicates
    /// a programming error rather than bad input.
    #[error("Failed to serialize draft: {0}")]
    Serialize(String),
}

/// Encodes a draft listing into a single string token.
///
/// # Errors
///
/// Returns `PayloadError::TooLarge` if the encoded form exceeds
/// [`MAX_TOKEN_LEN`]; the caller must shorten the draft rather than
/// rely on the transport to truncate.
pub fn encode(draft: &DraftListing) -> Result<String, PayloadError> {
    let token =
        serde_json::to_string(draft).map_err(|e| PayloadError::Serialize(e.to_string()))?;

    if token.chars().count() > MAX_TOKEN_LEN {
        return Err(PayloadError::TooLarge {
            actual: token.chars().count(),
            limit: MAX_TOKEN_LEN,
        });
    }

    Ok(token)
}

/// Decodes a token back into a draft listing.
///
/// Never panics on attacker-controlled input; every failure mode is a
/// typed error.
pub fn decode(token: Option<&str>) -> Result<DraftListing, PayloadError> {
    let token = token.ok_or(PayloadError::Missing)?;
    serde_json::from_str(token).map_err(|e| PayloadError::Malformed(e.to_string()))
}
