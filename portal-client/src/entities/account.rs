// The business account record. A single-row collection: `load` yields
// a page of one, edits go through the standard patch path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use portal_core::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAccount {
    pub business_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form schedule object, owned by the backend.
    #[serde(default)]
    pub operating_hours: Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instagram_business_id: Option<String>,
}

impl Resource for BusinessAccount {
    const PATH: &'static str = "account";

    fn id(&self) -> &str {
        &self.business_id
    }
}
