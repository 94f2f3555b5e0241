use super::envelope::{decode, unwrap_collection};
use super::{ApiClient, ApiResult};
use crate::models::DashboardStats;

/// Stats come wrapped as `{ data: {...} }`
pub async fn get_stats(client: &ApiClient) -> ApiResult<DashboardStats> {
    let raw = client.get_value("/api/admin/dashboard").await;
    decode(raw.map(|value| unwrap_collection(value, "data")))
}
