//! Shared domain primitives (identifiers and errors).

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ListingId, OwnerId};
