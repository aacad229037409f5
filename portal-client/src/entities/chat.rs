// Chat history. Read-only in the portal.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use portal_core::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: String,
    pub sender_id: String,
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub message_type: Option<String>,
    /// Display name of the sender, when known.
    #[serde(default)]
    pub name: Option<String>,
}

impl Resource for ChatMessage {
    const PATH: &'static str = "chat-messages";

    fn id(&self) -> &str {
        &self.message_id
    }
}
