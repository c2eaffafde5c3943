//! PostgreSQL adapters.

mod listing_repository;

pub use listing_repository::PostgresListingStore;
