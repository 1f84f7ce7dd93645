//! Receiving form endpoints
//!
//! Each receiving screen opens a session, selects a purchase order, streams
//! serial input events and finally submits the delivery receipt.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{PurchaseOrderSummary, ReceivedSummary, SerialType},
    receiving::{ReceivingForm, ReceivingRecord},
    services::receiving::ReceivingSessionView,
};

/// Purchase order selection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SelectPurchaseOrderRequest {
    #[validate(length(min = 1, max = 64, message = "Purchase order number must be 1 to 64 characters"))]
    pub po_number: String,
}

/// Current content of a serial input
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSerialRequest {
    #[validate(length(max = 64, message = "Serial number must be at most 64 characters"))]
    #[serde(default)]
    pub value: String,
}

/// List purchase orders open for receiving
#[utoipa::path(
    get,
    path = "/purchase-orders",
    tag = "receiving",
    responses(
        (status = 200, description = "Open purchase orders", body = Vec<PurchaseOrderSummary>),
        (status = 502, description = "Warehouse API error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_purchase_orders(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PurchaseOrderSummary>>> {
    let orders = state.services.receiving.list_purchase_orders().await?;
    Ok(Json(orders))
}

/// Open a receiving session
#[utoipa::path(
    post,
    path = "/receiving/sessions",
    tag = "receiving",
    responses(
        (status = 201, description = "Session opened", body = ReceivingSessionView),
        (status = 409, description = "Too many open sessions")
    )
)]
pub async fn open_session(
    State(state): State<crate::AppState>,
) -> AppResult<(StatusCode, Json<ReceivingSessionView>)> {
    let view = state.services.receiving.open_session().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Get a receiving session
#[utoipa::path(
    get,
    path = "/receiving/sessions/{id}",
    tag = "receiving",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session state", body = ReceivingSessionView),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReceivingSessionView>> {
    let view = state.services.receiving.get_session(id).await?;
    Ok(Json(view))
}

/// Close a receiving session
#[utoipa::path(
    delete,
    path = "/receiving/sessions/{id}",
    tag = "receiving",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn close_session(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.receiving.close_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Select the purchase order to receive
#[utoipa::path(
    post,
    path = "/receiving/sessions/{id}/purchase-order",
    tag = "receiving",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = SelectPurchaseOrderRequest,
    responses(
        (status = 200, description = "Purchase order selected", body = ReceivingSessionView),
        (status = 404, description = "Session or purchase order not found"),
        (status = 502, description = "Warehouse API error", body = crate::error::ErrorResponse)
    )
)]
pub async fn select_purchase_order(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectPurchaseOrderRequest>,
) -> AppResult<Json<ReceivingSessionView>> {
    request.validate()?;
    let view = state
        .services
        .receiving
        .select_purchase_order(id, &request.po_number)
        .await?;
    Ok(Json(view))
}

/// Record the current content of a serial input
#[utoipa::path(
    put,
    path = "/receiving/sessions/{id}/items/{index}/serials/{serial_type}",
    tag = "receiving",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based item position"),
        ("serial_type" = SerialType, Path, description = "indoor or outdoor")
    ),
    request_body = UpdateSerialRequest,
    responses(
        (status = 200, description = "Updated item", body = ReceivingRecord),
        (status = 404, description = "Session or item not found")
    )
)]
pub async fn update_serial(
    State(state): State<crate::AppState>,
    Path((id, index, serial_type)): Path<(Uuid, usize, SerialType)>,
    Json(request): Json<UpdateSerialRequest>,
) -> AppResult<Json<ReceivingRecord>> {
    request.validate()?;
    let record = state
        .services
        .receiving
        .update_serial(id, index, serial_type, &request.value)
        .await?;
    Ok(Json(record))
}

/// Commit a serial input when it loses focus (uppercases the stored value)
#[utoipa::path(
    post,
    path = "/receiving/sessions/{id}/items/{index}/serials/{serial_type}/commit",
    tag = "receiving",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based item position"),
        ("serial_type" = SerialType, Path, description = "indoor or outdoor")
    ),
    responses(
        (status = 200, description = "Updated item", body = ReceivingRecord),
        (status = 404, description = "Session or item not found")
    )
)]
pub async fn commit_serial(
    State(state): State<crate::AppState>,
    Path((id, index, serial_type)): Path<(Uuid, usize, SerialType)>,
) -> AppResult<Json<ReceivingRecord>> {
    let record = state
        .services
        .receiving
        .commit_serial(id, index, serial_type)
        .await?;
    Ok(Json(record))
}

/// Submit the receiving
#[utoipa::path(
    post,
    path = "/receiving/sessions/{id}/submit",
    tag = "receiving",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = ReceivingForm,
    responses(
        (status = 200, description = "Receiving recorded", body = ReceivedSummary),
        (status = 422, description = "Form incomplete", body = crate::error::ErrorResponse),
        (status = 502, description = "Warehouse API error, session kept", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<ReceivingForm>,
) -> AppResult<Json<ReceivedSummary>> {
    form.validate()?;
    let summary = state.services.receiving.submit(id, &form).await?;
    Ok(Json(summary))
}

/// Clear the receiving form
#[utoipa::path(
    post,
    path = "/receiving/sessions/{id}/reset",
    tag = "receiving",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session cleared", body = ReceivingSessionView),
        (status = 404, description = "Session not found")
    )
)]
pub async fn reset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReceivingSessionView>> {
    let view = state.services.receiving.reset(id).await?;
    Ok(Json(view))
}
