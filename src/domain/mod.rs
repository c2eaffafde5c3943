//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors)
//! - `catalog` - Static tier catalog and pricing products
//! - `listing` - Listing lifecycle, payload codec, presentation logic
//! - `webhook` - Payment event verification and the activation engine

pub mod catalog;
pub mod foundation;
pub mod listing;
pub mod webhook;
