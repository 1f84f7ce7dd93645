//! Inventory grid rows and query parameters

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Inventory movement row as served by the warehouse API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryRow {
    pub item_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub beginning_balance: i64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub receipts: i64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub issues: i64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub returns: i64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub scrap: i64,
}

impl InventoryRow {
    pub fn ending_balance(&self) -> i64 {
        self.beginning_balance
            .saturating_add(self.receipts)
            .saturating_add(self.returns)
            .saturating_sub(self.issues)
            .saturating_sub(self.scrap)
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.item_code.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Inventory row with its computed ending balance, as shown in the grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryLine {
    #[serde(flatten)]
    pub row: InventoryRow,
    pub ending_balance: i64,
}

impl From<InventoryRow> for InventoryLine {
    fn from(row: InventoryRow) -> Self {
        let ending_balance = row.ending_balance();
        Self { row, ending_balance }
    }
}

/// Inventory grid query parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct InventoryQuery {
    /// Case-insensitive match on item code or description
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Only rows whose ending balance is above zero
    pub in_stock_only: Option<bool>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl InventoryQuery {
    /// Whether a row passes every filter set on this query
    pub fn accepts(&self, line: &InventoryLine) -> bool {
        if let Some(search) = non_blank(&self.search) {
            if !line.row.matches_search(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = non_blank(&self.category) {
            if !line.row.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(location) = non_blank(&self.location) {
            if !line.row.location.eq_ignore_ascii_case(location) {
                return false;
            }
        }
        if self.in_stock_only.unwrap_or(false) && line.ending_balance <= 0 {
            return false;
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// One page of the inventory grid
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryPage {
    pub items: Vec<InventoryLine>,
    /// Rows matching the filters, across all pages
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Values offered by the grid's filter dropdowns
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct InventoryFilters {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
}

/// Integer quantity that tolerates the API sending strings, blanks or junk.
///
/// Leading digits are kept ("12 pcs" reads as 12); anything without a
/// leading integer reads as 0.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        serde_json::Value::String(s) => leading_integer(s),
        _ => None,
    };

    Ok(parsed.unwrap_or_else(|| {
        tracing::debug!("Non-numeric inventory quantity {} read as 0", value);
        0
    }))
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
