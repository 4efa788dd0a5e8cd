//! Domain types and models

pub mod chat;
pub mod meeting;
pub mod notification;
pub mod user;

// Re-export for convenience
pub use chat::{ChatMessage, Contact, Presence, LOCAL_SENDER};
pub use meeting::{Meeting, MeetingDraft, Platform, Recurrence};
pub use notification::{Notification, NotificationKind};
pub use user::{Credentials, ProfileUpdate, Session};
