//! HTTP adapter - axum routes for the public board, owner dashboard,
//! checkout entry point, and the payment webhook endpoint.

pub mod board;

pub use board::{api_router, AppState};
