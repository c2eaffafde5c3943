//! Metro Listings - Regional Job-Listing Marketplace
//!
//! Employers pay to post job ads in one of three visibility tiers;
//! listings expire after a tier-determined duration, and job seekers
//! browse an unauthenticated public board.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
