//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts
//! between the domain and the outside world; adapters implement them.
//!
//! - `ListingStore` - the persistent listing store gateway
//! - `PaymentProvider` - checkout session creation at the payment
//!   provider (the hosted payment UI itself is out of scope)

mod listing_store;
mod payment_provider;

pub use listing_store::{InsertOutcome, ListingStore};
pub use payment_provider::{CheckoutSessionRef, CreateCheckoutRequest, PaymentError, PaymentProvider};
