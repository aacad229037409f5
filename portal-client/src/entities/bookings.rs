// Customer bookings. Read-mostly: the portal reviews them but the
// booking flow itself lives in the customer-facing channels.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use portal_core::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub service_name: String,
    pub duration_minutes: u32,
    pub preferred_date_time: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl Resource for Booking {
    const PATH: &'static str = "bookings";

    fn id(&self) -> &str {
        &self.booking_id
    }
}
