//! Axum router configuration for the listings API.
//!
//! Webhook routes are nested separately from the rest of the API:
//! they carry no user context and are authenticated by signature
//! alone.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_checkout, delete_listing, get_board, get_owner_listings, get_products,
    handle_payment_webhook, health, update_listing, AppState,
};

/// Create the public board and owner routes.
///
/// # Routes
///
/// ## Public Endpoints
/// - `GET /board` - Active listings grouped by tier
/// - `GET /products` - Tier catalog (with `?tier=` preselect)
/// - `POST /checkout` - Start a checkout for a draft listing
///
/// ## Owner Endpoints
/// - `GET /owners/:owner_id/listings` - Owner's listings, active/expired
/// - `PUT /owners/:owner_id/listings/:id` - Edit descriptive fields
/// - `DELETE /owners/:owner_id/listings/:id` - Remove a listing
pub fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/board", get(get_board))
        .route("/products", get(get_products))
        .route("/checkout", post(create_checkout))
        .route("/owners/:owner_id/listings", get(get_owner_listings))
        .route(
            "/owners/:owner_id/listings/:id",
            put(update_listing).delete(delete_listing),
        )
}

/// Create the payment webhook router.
///
/// Separate from the board routes because webhook requests are
/// authenticated by their signature, not by any caller identity.
///
/// # Routes
/// - `POST /payments` - Payment provider event delivery
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/payments", post(handle_payment_webhook))
}

/// Create the complete API router with shared state applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", board_routes())
        .nest("/api/webhooks", webhook_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
