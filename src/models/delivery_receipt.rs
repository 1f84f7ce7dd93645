//! Delivery receipt model (viewer and print layout)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryReceiptShort {
    pub dr_number: String,
    pub dr_date: String,
    pub po_number: String,
    #[serde(default)]
    pub supplier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryReceipt {
    pub dr_number: String,
    pub dr_date: String,
    pub po_number: String,
    #[serde(default)]
    pub supplier: String,
    pub received_by: Option<String>,
    #[serde(default)]
    pub items: Vec<DeliveryReceiptLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryReceiptLine {
    #[serde(default)]
    pub unit_description: String,
    pub indoor_model: Option<String>,
    pub outdoor_model: Option<String>,
    #[serde(default)]
    pub indoor_serial: String,
    #[serde(default)]
    pub outdoor_serial: String,
}

/// Delivery receipt ready for the viewer and the printed copy
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeliveryReceiptView {
    #[serde(flatten)]
    pub receipt: DeliveryReceipt,
    /// Long form date, e.g. "October 18, 2026"; the raw value when it does not parse
    pub dr_date_display: String,
    pub total_units: usize,
}

impl From<DeliveryReceipt> for DeliveryReceiptView {
    fn from(receipt: DeliveryReceipt) -> Self {
        let dr_date_display = display_date(&receipt.dr_date);
        let total_units = receipt.items.len();
        Self {
            receipt,
            dr_date_display,
            total_units,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct DeliveryReceiptQuery {
    /// Matches DR number, PO number or supplier
    pub search: Option<String>,
}

impl DeliveryReceiptQuery {
    pub fn accepts(&self, receipt: &DeliveryReceiptShort) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };
        [&receipt.dr_number, &receipt.po_number, &receipt.supplier]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Format an API date (`YYYY-MM-DD`, optionally followed by a time) for display
pub fn display_date(raw: &str) -> String {
    let date_part = raw.trim().get(..10).unwrap_or(raw.trim());
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
