use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "wire::string_or_number")]
    pub id: String,
    /// Numeric `user_id` on some backends, string on others
    #[serde(default, alias = "user_id", deserialize_with = "wire::opt_string_or_number")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub current_pack: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

lenient_record!(Customer, "customerId" => "user_id");

/// Query parameters accepted by the customer listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilters {
    pub status: Option<String>,
    pub pack: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl CustomerFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_string()));
        }
        if let Some(pack) = self.pack.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("pack", pack.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}
