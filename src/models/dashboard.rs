use serde::{Deserialize, Serialize};

/// Headline counters of the dashboard page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_customers: u64,
    pub total_vendors: u64,
    pub total_bookings: u64,
    pub active_subscriptions: u64,
    pub revenue: f64,
    pub total_profit: f64,
}
