use serde_json::Value;

use super::envelope::{decode, unwrap_collection};
use super::{encode_segment, ApiClient, ApiResult};
use crate::models::{Plan, PlanInput};

pub async fn get_all(client: &ApiClient) -> ApiResult<Vec<Plan>> {
    let raw = client.get_value("/api/plans/all").await;
    decode(raw.map(|value| unwrap_collection(value, "plans")))
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> ApiResult<Plan> {
    client.get(&format!("/api/plans/{}", encode_segment(id))).await
}

pub async fn create(client: &ApiClient, plan: &PlanInput) -> ApiResult<Value> {
    log::info!("➕ Creating plan {}", plan.name);
    client.post("/api/plans/add", plan).await
}

pub async fn update(client: &ApiClient, id: &str, plan: &PlanInput) -> ApiResult<Value> {
    client
        .put(&format!("/api/plans/update/{}", encode_segment(id)), plan)
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    log::info!("🗑️ Deleting plan {}", id);
    client
        .delete(&format!("/api/plans/delete/{}", encode_segment(id)))
        .await
}
