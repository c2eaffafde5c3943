//! Request handlers for the listings API.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::dto::{
    BoardResponse, CheckoutResponse, CreateCheckoutRequestBody, ErrorResponse, ListingResponse,
    OwnerListingsResponse, ProductsResponse, TierPreselectQuery, WebhookAck,
};
use crate::domain::catalog::{product_for, Tier, PRODUCTS};
use crate::domain::foundation::{DomainError, ErrorCode, ListingId, OwnerId};
use crate::domain::listing::{
    encode, partition_by_activity, partition_by_tier, ListingUpdate, PayloadError,
};
use crate::domain::webhook::{ActivationEngine, WebhookVerifier};
use crate::ports::{CreateCheckoutRequest, ListingStore, PaymentProvider};

/// Header carrying the payment provider's webhook signature.
pub const SIGNATURE_HEADER: &str = "payment-signature";

/// Shared state for the listings API.
///
/// The verifier and engine are immutable after init; the only shared
/// mutable resource is behind the `ListingStore` port.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
    pub verifier: Arc<WebhookVerifier>,
    pub engine: Arc<ActivationEngine>,
    pub payments: Arc<dyn PaymentProvider>,
}

fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn domain_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ListingNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::DatabaseError | ErrorCode::Timeout | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_json(status, err.to_string())
}

// ════════════════════════════════════════════════════════════════════
// Webhook Endpoint
// ════════════════════════════════════════════════════════════════════

/// Handles the payment provider's completion callback.
///
/// Responses drive the provider's redelivery: 200 for activation,
/// duplicate redelivery, or recognized-but-ignored events; 400 for
/// signature/payload failures; 500 for persistence failures.
pub async fn handle_payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        return error_json(StatusCode::BAD_REQUEST, "No signature");
    };

    let event = match state.verifier.verify_and_parse(&body, signature) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "webhook signature verification failed");
            return error_json(e.status_code(), e.to_string());
        }
    };

    match state.engine.activate(&event, Utc::now()).await {
        Ok(outcome) => {
            info!(event_id = %event.id, ?outcome, "webhook processed");
            (StatusCode::OK, Json(WebhookAck { received: true })).into_response()
        }
        Err(e) => {
            // A rejected completion event means someone paid and got
            // no listing; the provider's event log retains the payload
            // for manual reconciliation.
            error!(event_id = %event.id, error = %e, retryable = e.is_retryable(),
                "webhook event rejected");
            error_json(e.status_code(), e.to_string())
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Public Board
// ════════════════════════════════════════════════════════════════════

/// The public job board: active listings grouped by tier.
pub async fn get_board(State(state): State<AppState>) -> Response {
    match state.store.find_active(Utc::now()).await {
        Ok(active) => {
            let board = partition_by_tier(active);
            Json(BoardResponse::from(board)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// The tier catalog, with the entry point's preselection applied.
pub async fn get_products(Query(query): Query<TierPreselectQuery>) -> Json<ProductsResponse> {
    Json(ProductsResponse {
        products: PRODUCTS.as_slice(),
        preselected: Tier::from_query_param(query.tier.as_deref()),
    })
}

// ════════════════════════════════════════════════════════════════════
// Checkout Entry Point
// ════════════════════════════════════════════════════════════════════

/// Starts a checkout session for a draft listing.
///
/// The draft is encoded into session metadata here; nothing is
/// persisted until the completion webhook arrives.
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<CreateCheckoutRequestBody>,
) -> Response {
    let token = match encode(&body.draft) {
        Ok(token) => token,
        Err(e @ PayloadError::TooLarge { .. }) => {
            return error_json(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(e) => {
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let request = CreateCheckoutRequest {
        product_id: product_for(body.tier).id.to_string(),
        tier: body.tier,
        payload_token: token,
    };

    match state.payments.create_checkout_session(request).await {
        Ok(session) => Json(CheckoutResponse {
            session_id: session.session_id,
            client_secret: session.client_secret,
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "checkout session creation failed");
            error_json(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Owner Dashboard
// ════════════════════════════════════════════════════════════════════

fn parse_owner(owner_id: &str) -> Result<OwnerId, Response> {
    OwnerId::parse(owner_id)
        .map_err(|_| error_json(StatusCode::BAD_REQUEST, "Invalid owner id"))
}

fn parse_listing_id(id: &str) -> Result<ListingId, Response> {
    Uuid::parse_str(id)
        .map(ListingId::from_uuid)
        .map_err(|_| error_json(StatusCode::BAD_REQUEST, "Invalid listing id"))
}

/// An owner's listings, split into active and expired.
pub async fn get_owner_listings(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Response {
    let owner_id = match parse_owner(&owner_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store.find_by_owner(owner_id).await {
        Ok(listings) => {
            let (active, expired) = partition_by_activity(listings, Utc::now());
            Json(OwnerListingsResponse {
                active: active.into_iter().map(ListingResponse::from).collect(),
                expired: expired.into_iter().map(ListingResponse::from).collect(),
            })
            .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Edits descriptive fields of an owner's listing. Tier and expiry are
/// immutable post-activation.
pub async fn update_listing(
    State(state): State<AppState>,
    Path((owner_id, id)): Path<(String, String)>,
    Json(update): Json<ListingUpdate>,
) -> Response {
    let owner_id = match parse_owner(&owner_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let id = match parse_listing_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store.update(id, owner_id, update).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Deletes an owner's listing.
pub async fn delete_listing(
    State(state): State<AppState>,
    Path((owner_id, id)): Path<(String, String)>,
) -> Response {
    let owner_id = match parse_owner(&owner_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let id = match parse_listing_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store.delete(id, owner_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
