use serde::{Deserialize, Serialize};

use super::Admin;

/// Token + profile of the logged-in admin. Both halves always travel
/// together; there is no way to build a session missing one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub admin: Admin,
}

impl Session {
    pub fn new(token: impl Into<String>, admin: Admin) -> Self {
        Self {
            token: token.into(),
            admin,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.admin.is_super_admin()
    }
}
