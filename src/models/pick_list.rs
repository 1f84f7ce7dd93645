//! Pick list model, grouped by storage location for the picker

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickListShort {
    pub pick_list_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickList {
    pub pick_list_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub lines: Vec<PickListLine>,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickListLine {
    pub item_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub unit: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = u32)]
    pub quantity: u32,
}

/// Lines picked from one location
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PickLocationGroup {
    pub location: String,
    pub lines: Vec<PickListLine>,
    pub total_quantity: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PickListView {
    pub pick_list_id: String,
    pub reference: String,
    pub created_at: String,
    /// Groups in the order their location first appears on the list
    pub groups: Vec<PickLocationGroup>,
    pub total_lines: usize,
    pub total_quantity: u64,
}

/// Location label used for lines the API sent without one
pub const UNASSIGNED_LOCATION: &str = "Unassigned";

impl From<PickList> for PickListView {
    fn from(list: PickList) -> Self {
        let total_lines = list.lines.len();
        let mut by_location: IndexMap<String, Vec<PickListLine>> = IndexMap::new();
        for line in list.lines {
            let location = match line.location.trim() {
                "" => UNASSIGNED_LOCATION.to_string(),
                loc => loc.to_string(),
            };
            by_location.entry(location).or_default().push(line);
        }

        let groups: Vec<PickLocationGroup> = by_location
            .into_iter()
            .map(|(location, lines)| PickLocationGroup {
                total_quantity: lines.iter().map(|l| u64::from(l.quantity)).sum(),
                location,
                lines,
            })
            .collect();

        Self {
            pick_list_id: list.pick_list_id,
            reference: list.reference,
            created_at: list.created_at,
            total_quantity: groups.iter().map(|g| g.total_quantity).sum(),
            total_lines,
            groups,
        }
    }
}
