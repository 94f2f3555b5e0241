use serde_json::Value;

use super::{encode_segment, ApiClient, ApiResult};
use crate::models::{Admin, AdminUpdate, NewAdmin};

const ADMINS_PATH: &str = "/api/admin/admins";

fn admin_path(id: &str) -> String {
    format!("{}/{}", ADMINS_PATH, encode_segment(id))
}

pub async fn get_all(client: &ApiClient) -> ApiResult<Vec<Admin>> {
    client.get(ADMINS_PATH).await
}

pub async fn create(client: &ApiClient, admin: &NewAdmin) -> ApiResult<Value> {
    log::info!("➕ Creating {} account for {}", admin.role, admin.email);
    client.post(ADMINS_PATH, admin).await
}

pub async fn update(client: &ApiClient, id: &str, changes: &AdminUpdate) -> ApiResult<Value> {
    client.put(&admin_path(id), changes).await
}

pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    log::info!("🗑️ Deleting admin {}", id);
    client.delete(&admin_path(id)).await
}
