use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "wire::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::opt_string_or_number")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_string_or_number")]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub booking_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

lenient_record!(Booking);

impl Booking {
    /// Services joined for a table cell, or a dash when there are none
    pub fn service_summary(&self) -> String {
        if self.services.is_empty() {
            "—".to_string()
        } else {
            self.services.join(", ")
        }
    }

    pub fn is_completed(&self) -> bool {
        self.booking_status.as_deref() == Some("completed")
    }
}

/// Body of `POST /api/bookings/add`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub customer_id: String,
    pub vendor_id: String,
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}
