//! Delivery receipt viewer service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        delivery_receipt::DeliveryReceiptQuery, DeliveryReceiptShort, DeliveryReceiptView,
    },
    services::warehouse_api::WarehouseApi,
};

#[derive(Clone)]
pub struct DeliveryReceiptsService {
    api: Arc<dyn WarehouseApi>,
}

impl DeliveryReceiptsService {
    pub fn new(api: Arc<dyn WarehouseApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &DeliveryReceiptQuery) -> AppResult<Vec<DeliveryReceiptShort>> {
        let receipts = self.api.list_delivery_receipts().await?;
        Ok(receipts.into_iter().filter(|r| query.accepts(r)).collect())
    }

    pub async fn get(&self, dr_number: &str) -> AppResult<DeliveryReceiptView> {
        let receipt = self.api.get_delivery_receipt(dr_number.trim()).await?;
        Ok(receipt.into())
    }
}
