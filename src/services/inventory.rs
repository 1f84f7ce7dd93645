//! Inventory grid service

use std::sync::Arc;

use indexmap::IndexSet;

use crate::{
    config::InventoryConfig,
    error::AppResult,
    models::inventory::{InventoryFilters, InventoryLine, InventoryPage, InventoryQuery},
    services::warehouse_api::WarehouseApi,
};

#[derive(Clone)]
pub struct InventoryService {
    api: Arc<dyn WarehouseApi>,
    config: InventoryConfig,
}

impl InventoryService {
    pub fn new(api: Arc<dyn WarehouseApi>, config: InventoryConfig) -> Self {
        Self { api, config }
    }

    /// Fetch the inventory, compute ending balances, filter and paginate
    pub async fn search(&self, query: &InventoryQuery) -> AppResult<InventoryPage> {
        let rows = self.api.list_inventory().await?;
        let fetched = rows.len();

        let matching: Vec<InventoryLine> = rows
            .into_iter()
            .map(InventoryLine::from)
            .filter(|line| query.accepts(line))
            .collect();

        let per_page = query
            .per_page
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size.max(1));
        let page = query.page.unwrap_or(1).max(1);
        let total = matching.len();

        tracing::debug!("Inventory: {} rows fetched, {} match", fetched, total);

        let items = matching
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Ok(InventoryPage {
            items,
            total,
            page,
            per_page,
        })
    }

    /// Distinct categories and locations, in the order they first appear
    pub async fn filters(&self) -> AppResult<InventoryFilters> {
        let rows = self.api.list_inventory().await?;

        let mut categories = IndexSet::new();
        let mut locations = IndexSet::new();
        for row in &rows {
            let category = row.category.trim();
            if !category.is_empty() {
                categories.insert(category.to_string());
            }
            let location = row.location.trim();
            if !location.is_empty() {
                locations.insert(location.to_string());
            }
        }

        Ok(InventoryFilters {
            categories: categories.into_iter().collect(),
            locations: locations.into_iter().collect(),
        })
    }
}
