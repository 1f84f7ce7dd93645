//! Purchase order model as served by the warehouse API

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

/// Line item identifier, echoed back to the API exactly as it was received
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Purchase order with the units to be received, in receiving order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseOrder {
    pub po_number: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub items: Vec<PoLineItem>,
}

/// One physical unit of a purchase order line ("Unit 2 of 4")
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PoLineItem {
    pub item_id: ItemId,
    /// 1-based position within the logical item
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = u32)]
    pub unit_number: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = u32)]
    pub total_quantity: u32,
    #[serde(default)]
    pub unit_description: String,
    pub indoor_model: Option<String>,
    pub outdoor_model: Option<String>,
}

impl PoLineItem {
    /// Label shown next to the serial inputs, e.g. "Unit 2 of 4"
    pub fn unit_label(&self) -> String {
        format!("Unit {} of {}", self.unit_number, self.total_quantity)
    }
}

/// Entry of the purchase order selection list
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseOrderSummary {
    pub po_number: String,
    #[serde(default)]
    pub supplier: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[schema(value_type = Option<u32>)]
    pub total_items: Option<u32>,
}
