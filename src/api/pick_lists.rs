//! Pick list viewer endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{PickListShort, PickListView},
};

/// List pick lists
#[utoipa::path(
    get,
    path = "/pick-lists",
    tag = "pick-lists",
    responses(
        (status = 200, description = "Pick lists", body = Vec<PickListShort>)
    )
)]
pub async fn list_pick_lists(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PickListShort>>> {
    let lists = state.services.pick_lists.list().await?;
    Ok(Json(lists))
}

/// Get a pick list grouped by location
#[utoipa::path(
    get,
    path = "/pick-lists/{id}",
    tag = "pick-lists",
    params(("id" = String, Path, description = "Pick list ID")),
    responses(
        (status = 200, description = "Pick list", body = PickListView),
        (status = 404, description = "Pick list not found")
    )
)]
pub async fn get_pick_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PickListView>> {
    let list = state.services.pick_lists.get(&id).await?;
    Ok(Json(list))
}
