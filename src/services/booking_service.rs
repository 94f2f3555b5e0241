use serde_json::Value;

use super::envelope::{decode, unwrap_collection};
use super::{ApiClient, ApiResult};
use crate::models::{Booking, NewBooking};

/// Listing payload is `{ bookings: [...] }`
pub async fn get_all(client: &ApiClient) -> ApiResult<Vec<Booking>> {
    let raw = client.get_value("/api/bookings/all").await;
    decode(raw.map(|value| unwrap_collection(value, "bookings")))
}

pub async fn create(client: &ApiClient, booking: &NewBooking) -> ApiResult<Value> {
    client.post("/api/bookings/add", booking).await
}
