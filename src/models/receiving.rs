//! Receiving submission payload and the API's reply to it

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

use super::purchase_order::ItemId;

/// Which of the two serial inputs of a unit is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SerialType {
    Indoor,
    Outdoor,
}

impl std::fmt::Display for SerialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerialType::Indoor => f.write_str("indoor"),
            SerialType::Outdoor => f.write_str("outdoor"),
        }
    }
}

/// Body POSTed to the API's receiving endpoint.
///
/// Field names follow the existing server contract, which mixes camelCase
/// with the snake_case `item_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingSubmission {
    pub po_number: String,
    pub dr_number: String,
    pub dr_date: String,
    pub items: Vec<SubmissionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    #[serde(rename = "item_id")]
    pub item_id: ItemId,
    pub unit_description: String,
    pub indoor_model: Option<String>,
    pub outdoor_model: Option<String>,
    pub indoor_serial: String,
    pub outdoor_serial: String,
}

/// Receipt summary returned by the API after a successful submission
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReceivedSummary {
    pub po_number: String,
    pub dr_number: String,
    pub dr_date: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = u32)]
    pub total_items: u32,
    #[serde(default)]
    pub received_items: Vec<ReceivedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReceivedItem {
    pub unit_description: String,
    pub indoor_serial: String,
    pub outdoor_serial: String,
}
