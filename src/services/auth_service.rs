use serde_json::Value;

use super::{ApiClient, ApiResult};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

const LOGIN_PATH: &str = "/api/admin/login";
const REGISTER_PATH: &str = "/api/admin/register";

/// Exchanges credentials for a token + admin profile. Does not touch the
/// session; `SessionManager::login` does that.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ApiResult<LoginResponse> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    client.post(LOGIN_PATH, &request).await
}

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> ApiResult<Value> {
    log::info!("📝 Registering admin account {}", request.email);
    client.post(REGISTER_PATH, request).await
}
