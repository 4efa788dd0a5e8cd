//! Chat mock records: contacts and local-only messages

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Sender id used for locally authored messages
pub const LOCAL_SENDER: &str = "me";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

/// A chat roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Directory handle contacts are looked up by (e.g. "AGENDA001").
    pub agenda_id: String,
    pub presence: Presence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<String>,
}

/// A single chat message; append-only, local-only, never delivered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(with = "crate::utils::time_format")]
    pub sent_at: NaiveTime,
}
