//! Pick list viewer service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{PickListShort, PickListView},
    services::warehouse_api::WarehouseApi,
};

#[derive(Clone)]
pub struct PickListsService {
    api: Arc<dyn WarehouseApi>,
}

impl PickListsService {
    pub fn new(api: Arc<dyn WarehouseApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<PickListShort>> {
        self.api.list_pick_lists().await
    }

    pub async fn get(&self, pick_list_id: &str) -> AppResult<PickListView> {
        let list = self.api.get_pick_list(pick_list_id.trim()).await?;
        tracing::debug!("Pick list {} has {} lines", list.pick_list_id, list.lines.len());
        Ok(list.into())
    }
}
