//! Inventory grid endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::inventory::{InventoryFilters, InventoryPage, InventoryQuery},
};

/// Search the inventory grid
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Inventory page", body = InventoryPage),
        (status = 502, description = "Warehouse API error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<InventoryPage>> {
    let page = state.services.inventory.search(&query).await?;
    Ok(Json(page))
}

/// Category and location choices for the grid filters
#[utoipa::path(
    get,
    path = "/inventory/filters",
    tag = "inventory",
    responses(
        (status = 200, description = "Filter values", body = InventoryFilters)
    )
)]
pub async fn inventory_filters(
    State(state): State<crate::AppState>,
) -> AppResult<Json<InventoryFilters>> {
    let filters = state.services.inventory.filters().await?;
    Ok(Json(filters))
}
