use serde_json::Value;

use super::envelope::{decode, unwrap_list};
use super::{encode_segment, with_query, ApiClient, ApiResult};
use crate::models::{BlockRequest, Vendor, VendorFilters};

const LIST_PATH: &str = "/api/vendors/getall";

/// Listing payload is `{ vendors: [...] }`; a payload without the list means
/// no vendors.
pub async fn get_all(client: &ApiClient, filters: &VendorFilters) -> ApiResult<Vec<Vendor>> {
    let path = with_query(LIST_PATH, &filters.query_pairs());
    let raw = client.get_value(&path).await;
    decode(raw.map(|value| unwrap_list(value, "vendors")))
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> ApiResult<Vendor> {
    client
        .get(&format!("/api/vendors/get/{}", encode_segment(id)))
        .await
}

pub async fn toggle_block(client: &ApiClient, id: &str, block: bool) -> ApiResult<Value> {
    log::info!("{} vendor {}", if block { "🚫 Blocking" } else { "✅ Unblocking" }, id);
    client
        .patch(
            &format!("/api/vendors/{}/block", encode_segment(id)),
            &BlockRequest { block },
        )
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    log::info!("🗑️ Deleting vendor {}", id);
    client
        .delete(&format!("/api/vendors/{}", encode_segment(id)))
        .await
}
