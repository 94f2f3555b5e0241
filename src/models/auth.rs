use serde::{Deserialize, Serialize};

use super::{Admin, AdminRole};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful payload of `POST /api/admin/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
}
