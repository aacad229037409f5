// Offered services.

use serde::{Deserialize, Serialize};

use portal_core::{Draft, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub service_id: String,
    pub service_name: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl Resource for ServiceOffering {
    const PATH: &'static str = "services";

    fn id(&self) -> &str {
        &self.service_id
    }
}

/// A new service before the backend assigns its id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceDraft {
    pub service_name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl Draft for ServiceDraft {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_name.trim().is_empty() {
            missing.push("service_name");
        }
        if self.duration_minutes == 0 {
            missing.push("duration_minutes");
        }
        if self.price == 0.0 {
            missing.push("price");
        }
        missing
    }
}
