//! Ephemeral notification records derived from the meeting store

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::URGENT_WINDOW_MINUTES;
use crate::types::meeting::Meeting;

/// Category of a derived notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Upcoming,
    Reminder,
    Invite,
}

/// An alert about an imminent meeting.
///
/// Synthesized on every generator sweep, deduplicated by `id`, mutated only
/// through read-flag toggling or dismissal, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub meeting: Meeting,
    pub message: String,
    /// Whole minutes until the meeting starts, at generation time.
    pub minutes_until_start: i64,
    /// Wall-clock instant the sweep that produced this alert ran.
    pub created_at: NaiveDateTime,
    pub read: bool,
}

impl Notification {
    /// True when the meeting starts soon enough to escalate.
    pub fn is_urgent(&self) -> bool {
        self.minutes_until_start <= URGENT_WINDOW_MINUTES
    }
}
