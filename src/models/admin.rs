use std::fmt;

use serde::{Deserialize, Serialize};

use super::wire;

/// Role carried by an admin account. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminRole {
    #[default]
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "super-admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated admin profile, as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Admin {
    #[serde(alias = "_id", deserialize_with = "wire::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
    /// `active` or `disabled`; only the admin listing sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

lenient_record!(Admin);

pub const ADMIN_ACTIVE: &str = "active";
pub const ADMIN_DISABLED: &str = "disabled";

impl Admin {
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some(ADMIN_ACTIVE)
    }

    /// Status the enable/disable toggle switches this account to
    pub fn toggled_status(&self) -> &'static str {
        if self.is_active() {
            ADMIN_DISABLED
        } else {
            ADMIN_ACTIVE
        }
    }

    /// Name shown in the sidebar header
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Administrator"
        } else {
            &self.name
        }
    }
}

/// Body of `POST /api/admin/admins`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

impl NewAdmin {
    /// Blank name, email or password is rejected before any request
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.password]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Body of `PUT /api/admin/admins/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("admin"), AdminRole::Admin)]
    #[case(json!("super-admin"), AdminRole::SuperAdmin)]
    fn role_uses_backend_spelling(#[case] raw: serde_json::Value, #[case] expected: AdminRole) {
        let role: AdminRole = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(role, expected);
        assert_eq!(serde_json::to_value(role).unwrap(), raw);
    }

    #[rstest]
    fn admin_accepts_mongo_id_and_missing_fields() {
        let admin: Admin = serde_json::from_value(json!({ "_id": "abc", "role": "super-admin" })).unwrap();
        assert_eq!(admin.id, "abc");
        assert!(admin.is_super_admin());
        assert_eq!(admin.display_name(), "Administrator");
    }

    #[rstest]
    fn mongo_id_wins_over_plain_id() {
        let admin: Admin = serde_json::from_value(json!({
            "_id": "mongo",
            "id": "legacy",
            "name": null,
            "role": "admin",
            "status": "disabled"
        }))
        .unwrap();
        assert_eq!(admin.id, "mongo");
        assert_eq!(admin.name, "");
        assert!(!admin.is_active());
        assert_eq!(admin.toggled_status(), ADMIN_ACTIVE);
    }

    #[rstest]
    fn stored_admin_round_trips_without_status() {
        let admin: Admin = serde_json::from_value(json!({ "id": "1", "name": "Priya", "email": "a@x.com", "role": "admin" })).unwrap();
        assert_eq!(
            serde_json::to_value(&admin).unwrap(),
            json!({ "id": "1", "name": "Priya", "email": "a@x.com", "role": "admin" })
        );
    }

    #[rstest]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_value::<Admin>(json!({ "id": "1", "role": "root" }));
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case("Ravi", "ravi@x.com", "secret", true)]
    #[case("Ravi", "  ", "secret", false)]
    #[case("", "ravi@x.com", "secret", false)]
    #[case("Ravi", "ravi@x.com", "", false)]
    fn new_admin_needs_name_email_password(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        let admin = NewAdmin {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: AdminRole::Admin,
        };
        assert_eq!(admin.has_required_fields(), expected);
    }

    #[rstest]
    fn update_omits_absent_fields() {
        let update = AdminUpdate {
            role: Some(AdminRole::SuperAdmin),
            ..AdminUpdate::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({ "role": "super-admin" }));
    }
}
