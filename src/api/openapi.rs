//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{delivery_receipts, health, inventory, pick_lists, receiving};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse Desk API",
        version = "0.3.0",
        description = "Receiving, inventory, delivery receipt and pick list screens backend"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Receiving
        receiving::list_purchase_orders,
        receiving::open_session,
        receiving::get_session,
        receiving::close_session,
        receiving::select_purchase_order,
        receiving::update_serial,
        receiving::commit_serial,
        receiving::submit,
        receiving::reset,
        // Inventory
        inventory::list_inventory,
        inventory::inventory_filters,
        // Delivery receipts
        delivery_receipts::list_delivery_receipts,
        delivery_receipts::get_delivery_receipt,
        // Pick lists
        pick_lists::list_pick_lists,
        pick_lists::get_pick_list,
    ),
    components(
        schemas(
            // Receiving
            receiving::SelectPurchaseOrderRequest,
            receiving::UpdateSerialRequest,
            crate::receiving::ReceivingForm,
            crate::receiving::ReceivingRecord,
            crate::services::receiving::ReceivingSessionView,
            crate::models::purchase_order::ItemId,
            crate::models::purchase_order::PurchaseOrder,
            crate::models::purchase_order::PoLineItem,
            crate::models::purchase_order::PurchaseOrderSummary,
            crate::models::receiving::SerialType,
            crate::models::receiving::ReceivingSubmission,
            crate::models::receiving::SubmissionItem,
            crate::models::receiving::ReceivedSummary,
            crate::models::receiving::ReceivedItem,
            // Inventory
            crate::models::inventory::InventoryRow,
            crate::models::inventory::InventoryLine,
            crate::models::inventory::InventoryPage,
            crate::models::inventory::InventoryFilters,
            // Delivery receipts
            crate::models::delivery_receipt::DeliveryReceipt,
            crate::models::delivery_receipt::DeliveryReceiptShort,
            crate::models::delivery_receipt::DeliveryReceiptLine,
            crate::models::delivery_receipt::DeliveryReceiptView,
            // Pick lists
            crate::models::pick_list::PickList,
            crate::models::pick_list::PickListShort,
            crate::models::pick_list::PickListLine,
            crate::models::pick_list::PickLocationGroup,
            crate::models::pick_list::PickListView,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "receiving", description = "Purchase order receiving"),
        (name = "inventory", description = "Inventory grid"),
        (name = "delivery-receipts", description = "Delivery receipt viewer"),
        (name = "pick-lists", description = "Pick list viewer")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
