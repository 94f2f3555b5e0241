use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Customer,
    Vendor,
}

/// Subscription plan offered to customers or vendors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Plan {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "wire::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub plan_type: Option<PlanType>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

lenient_record!(Plan);

fn default_active() -> bool {
    true
}

/// Create/update body for plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub name: String,
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
    pub plan_type: PlanType,
}

impl PlanInput {
    /// Splits a comma separated feature list as typed into the plan form
    pub fn parse_features(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }
}
