use serde_json::Value;

use super::envelope::{decode, unwrap_collection};
use super::{encode_segment, with_query, ApiClient, ApiResult};
use crate::models::{Customer, CustomerFilters};

const LIST_PATH: &str = "/api/customers/getCustomers";

/// The listing answers `{ data: [...], total }` on newer backends and a
/// bare array on older ones; both yield the array.
pub async fn get_all(client: &ApiClient, filters: &CustomerFilters) -> ApiResult<Vec<Customer>> {
    let path = with_query(LIST_PATH, &filters.query_pairs());
    let raw = client.get_value(&path).await;
    decode(raw.map(|value| unwrap_collection(value, "data")))
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> ApiResult<Customer> {
    client
        .get(&format!("/api/customers/{}", encode_segment(id)))
        .await
}

pub async fn block(client: &ApiClient, id: &str) -> ApiResult<Value> {
    log::info!("🚫 Blocking customer {}", id);
    client
        .patch_empty(&format!("/api/customers/{}/block", encode_segment(id)))
        .await
}

pub async fn unblock(client: &ApiClient, id: &str) -> ApiResult<Value> {
    log::info!("✅ Unblocking customer {}", id);
    client
        .patch_empty(&format!("/api/customers/{}/unblock", encode_segment(id)))
        .await
}
