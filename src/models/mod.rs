// ============================================================================
// MODELS - Shapes shared with the marketplace backend
// ============================================================================

/// Implements `Serialize`/`Deserialize` for a record declared with
/// `#[serde(remote = "Self")]`, running the payload through
/// [`wire::normalize_record`] first. Extra `preferred => fallback` pairs name
/// further keys where both spellings may arrive together.
macro_rules! lenient_record {
    ($ty:ident $(, $preferred:literal => $fallback:literal)*) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $ty::serialize(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                let record = $crate::models::wire::normalize_record(
                    raw,
                    &[("_id", "id") $(, ($preferred, $fallback))*],
                );
                $ty::deserialize(record).map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

pub mod admin;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod dashboard;
pub mod plan;
pub mod session;
pub mod subscription;
pub mod vendor;

pub use admin::*;
pub use auth::*;
pub use booking::*;
pub use customer::*;
pub use dashboard::*;
pub use plan::*;
pub use session::*;
pub use subscription::*;
pub use vendor::*;

/// Lenient decoding for records and for ids the backend sends either as text
/// or as numbers
pub(crate) mod wire {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Drops `null` fields so they fall back to the field default, and for
    /// each `(preferred, fallback)` pair drops the fallback key when the
    /// preferred one is present. Non-objects are returned unchanged.
    pub fn normalize_record(value: Value, duplicates: &[(&str, &str)]) -> Value {
        match value {
            Value::Object(mut fields) => {
                fields.retain(|_, v| !v.is_null());
                for (preferred, fallback) in duplicates {
                    if fields.contains_key(*preferred) {
                        fields.remove(*fallback);
                    }
                }
                Value::Object(fields)
            }
            other => other,
        }
    }

    fn to_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(to_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?.and_then(to_text))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use rstest::rstest;
        use serde_json::json;

        #[rstest]
        #[case(json!({ "_id": "a", "id": "b", "name": "x" }), json!({ "_id": "a", "name": "x" }))]
        #[case(json!({ "_id": null, "id": "b" }), json!({ "id": "b" }))]
        #[case(json!({ "id": "b", "email": null }), json!({ "id": "b" }))]
        #[case(json!([1, null]), json!([1, null]))]
        fn record_keeps_one_id_and_no_nulls(#[case] raw: Value, #[case] expected: Value) {
            assert_eq!(normalize_record(raw, &[("_id", "id")]), expected);
        }
    }
}
