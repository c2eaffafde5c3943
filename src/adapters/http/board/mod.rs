//! Board HTTP module - handlers, DTOs and routes for listings.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::api_router;
