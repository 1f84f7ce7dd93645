//! Client for the remote warehouse API
//!
//! Every screen reads from and submits to this API. The service layer talks
//! to it through the [`WarehouseApi`] trait so it can run against a mock.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
    models::{
        ApiEnvelope, DeliveryReceipt, DeliveryReceiptShort, InventoryRow, PickList, PickListShort,
        PurchaseOrder, PurchaseOrderSummary, ReceivedSummary, ReceivingSubmission,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseApi: Send + Sync {
    /// Purchase orders still open for receiving
    async fn list_purchase_orders(&self) -> AppResult<Vec<PurchaseOrderSummary>>;

    async fn get_purchase_order(&self, po_number: &str) -> AppResult<PurchaseOrder>;

    async fn submit_receiving(&self, submission: &ReceivingSubmission) -> AppResult<ReceivedSummary>;

    async fn list_inventory(&self) -> AppResult<Vec<InventoryRow>>;

    async fn list_delivery_receipts(&self) -> AppResult<Vec<DeliveryReceiptShort>>;

    async fn get_delivery_receipt(&self, dr_number: &str) -> AppResult<DeliveryReceipt>;

    async fn list_pick_lists(&self) -> AppResult<Vec<PickListShort>>;

    async fn get_pick_list(&self, pick_list_id: &str) -> AppResult<PickList>;

    /// Succeeds when the API answers its health endpoint
    async fn ping(&self) -> AppResult<()>;
}

/// [`WarehouseApi`] over HTTP/JSON
#[derive(Clone)]
pub struct HttpWarehouseApi {
    client: Client,
    base_url: Url,
}

impl HttpWarehouseApi {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::Internal(format!("Invalid upstream URL {}: {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!("Upstream URL {} cannot be a base", base)));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], context: &str) -> AppResult<T> {
        let url = self.endpoint(segments);
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(response, context).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> AppResult<T> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(format!("{} not found", context)));
    }

    let body = response.bytes().await?;
    match serde_json::from_slice::<ApiEnvelope<T>>(&body) {
        Ok(envelope) => envelope.into_data(context),
        Err(e) if status.is_success() => Err(AppError::Upstream(format!(
            "{}: unexpected response from the warehouse API: {}",
            context, e
        ))),
        Err(_) => Err(AppError::Upstream(format!(
            "{}: the warehouse API answered HTTP {}",
            context, status
        ))),
    }
}

#[async_trait]
impl WarehouseApi for HttpWarehouseApi {
    async fn list_purchase_orders(&self) -> AppResult<Vec<PurchaseOrderSummary>> {
        self.get(&["purchase-orders"], "Purchase order list").await
    }

    async fn get_purchase_order(&self, po_number: &str) -> AppResult<PurchaseOrder> {
        self.get(&["purchase-orders", po_number], &format!("Purchase order {}", po_number))
            .await
    }

    async fn submit_receiving(&self, submission: &ReceivingSubmission) -> AppResult<ReceivedSummary> {
        let url = self.endpoint(&["receiving"]);
        tracing::debug!(
            "POST {} (PO {}, {} items)",
            url,
            submission.po_number,
            submission.items.len()
        );
        let response = self.client.post(url).json(submission).send().await?;
        decode(response, "Receiving").await
    }

    async fn list_inventory(&self) -> AppResult<Vec<InventoryRow>> {
        self.get(&["inventory"], "Inventory").await
    }

    async fn list_delivery_receipts(&self) -> AppResult<Vec<DeliveryReceiptShort>> {
        self.get(&["delivery-receipts"], "Delivery receipt list").await
    }

    async fn get_delivery_receipt(&self, dr_number: &str) -> AppResult<DeliveryReceipt> {
        self.get(&["delivery-receipts", dr_number], &format!("Delivery receipt {}", dr_number))
            .await
    }

    async fn list_pick_lists(&self) -> AppResult<Vec<PickListShort>> {
        self.get(&["pick-lists"], "Pick list index").await
    }

    async fn get_pick_list(&self, pick_list_id: &str) -> AppResult<PickList> {
        self.get(&["pick-lists", pick_list_id], &format!("Pick list {}", pick_list_id))
            .await
    }

    async fn ping(&self) -> AppResult<()> {
        let response = self.client.get(self.endpoint(&["health"])).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Upstream(format!(
                "Health check answered HTTP {}",
                response.status()
            )))
        }
    }
}
