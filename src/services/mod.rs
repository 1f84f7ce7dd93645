//! Business logic services

pub mod delivery_receipts;
pub mod inventory;
pub mod pick_lists;
pub mod receiving;
pub mod warehouse_api;

use std::sync::Arc;

use crate::config::{InventoryConfig, ReceivingConfig};
use warehouse_api::WarehouseApi;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub receiving: receiving::ReceivingService,
    pub inventory: inventory::InventoryService,
    pub delivery_receipts: delivery_receipts::DeliveryReceiptsService,
    pub pick_lists: pick_lists::PickListsService,
    pub warehouse_api: Arc<dyn WarehouseApi>,
}

impl Services {
    /// Create all services on top of the given warehouse API client
    pub fn new(
        warehouse_api: Arc<dyn WarehouseApi>,
        receiving_config: ReceivingConfig,
        inventory_config: InventoryConfig,
    ) -> Self {
        Self {
            receiving: receiving::ReceivingService::new(warehouse_api.clone(), receiving_config),
            inventory: inventory::InventoryService::new(warehouse_api.clone(), inventory_config),
            delivery_receipts: delivery_receipts::DeliveryReceiptsService::new(warehouse_api.clone()),
            pick_lists: pick_lists::PickListsService::new(warehouse_api.clone()),
            warehouse_api,
        }
    }
}
