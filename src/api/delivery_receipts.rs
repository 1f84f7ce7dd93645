//! Delivery receipt viewer endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{delivery_receipt::DeliveryReceiptQuery, DeliveryReceiptShort, DeliveryReceiptView},
};

/// List delivery receipts
#[utoipa::path(
    get,
    path = "/delivery-receipts",
    tag = "delivery-receipts",
    params(DeliveryReceiptQuery),
    responses(
        (status = 200, description = "Delivery receipts", body = Vec<DeliveryReceiptShort>)
    )
)]
pub async fn list_delivery_receipts(
    State(state): State<crate::AppState>,
    Query(query): Query<DeliveryReceiptQuery>,
) -> AppResult<Json<Vec<DeliveryReceiptShort>>> {
    let receipts = state.services.delivery_receipts.list(&query).await?;
    Ok(Json(receipts))
}

/// Get a delivery receipt for viewing or printing
#[utoipa::path(
    get,
    path = "/delivery-receipts/{dr_number}",
    tag = "delivery-receipts",
    params(("dr_number" = String, Path, description = "Delivery receipt number")),
    responses(
        (status = 200, description = "Delivery receipt", body = DeliveryReceiptView),
        (status = 404, description = "Delivery receipt not found")
    )
)]
pub async fn get_delivery_receipt(
    State(state): State<crate::AppState>,
    Path(dr_number): Path<String>,
) -> AppResult<Json<DeliveryReceiptView>> {
    let receipt = state.services.delivery_receipts.get(&dr_number).await?;
    Ok(Json(receipt))
}
