use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Vendor {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "wire::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::opt_string_or_number")]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_pack: Option<String>,
    #[serde(default)]
    pub jobs_completed: u32,
    #[serde(default)]
    pub is_blocked: bool,
}

lenient_record!(Vendor);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilters {
    pub category: Option<String>,
    pub status: Option<String>,
}

impl VendorFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [("category", &self.category), ("status", &self.status)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .collect()
    }
}

/// Body of `PATCH /api/vendors/{id}/block`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub block: bool,
}
