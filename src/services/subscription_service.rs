use serde_json::Value;

use super::envelope::{decode, unwrap_collection};
use super::{encode_segment, ApiClient, ApiResult};
use crate::models::{Subscription, SubscriptionInput};

pub async fn get_by_user_id(client: &ApiClient, user_id: &str) -> ApiResult<Value> {
    client
        .get(&format!("/api/subscriptions/user/{}", encode_segment(user_id)))
        .await
}

pub async fn get_all(client: &ApiClient) -> ApiResult<Vec<Subscription>> {
    let raw = client.get_value("/api/subscriptions/all").await;
    decode(raw.map(|value| unwrap_collection(value, "subscriptions")))
}

pub async fn create(client: &ApiClient, subscription: &SubscriptionInput) -> ApiResult<Value> {
    client.post("/api/subscriptions/add", subscription).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    subscription: &SubscriptionInput,
) -> ApiResult<Value> {
    client
        .put(
            &format!("/api/subscriptions/update/{}", encode_segment(id)),
            subscription,
        )
        .await
}
