//! API handlers for Warehouse Desk REST endpoints

pub mod delivery_receipts;
pub mod health;
pub mod inventory;
pub mod openapi;
pub mod pick_lists;
pub mod receiving;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Receiving
        .route("/purchase-orders", get(receiving::list_purchase_orders))
        .route("/receiving/sessions", post(receiving::open_session))
        .route(
            "/receiving/sessions/:id",
            get(receiving::get_session).delete(receiving::close_session),
        )
        .route(
            "/receiving/sessions/:id/purchase-order",
            post(receiving::select_purchase_order),
        )
        .route(
            "/receiving/sessions/:id/items/:index/serials/:serial_type",
            put(receiving::update_serial),
        )
        .route(
            "/receiving/sessions/:id/items/:index/serials/:serial_type/commit",
            post(receiving::commit_serial),
        )
        .route("/receiving/sessions/:id/submit", post(receiving::submit))
        .route("/receiving/sessions/:id/reset", post(receiving::reset))
        // Inventory grid
        .route("/inventory", get(inventory::list_inventory))
        .route("/inventory/filters", get(inventory::inventory_filters))
        // Delivery receipts
        .route("/delivery-receipts", get(delivery_receipts::list_delivery_receipts))
        .route(
            "/delivery-receipts/:dr_number",
            get(delivery_receipts::get_delivery_receipt),
        )
        // Pick lists
        .route("/pick-lists", get(pick_lists::list_pick_lists))
        .route("/pick-lists/:id", get(pick_lists::get_pick_list))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
