//! Upcoming-meeting notification generation.
//!
//! Polling/recompute design: each sweep compares "now" against every
//! meeting's start and synthesizes an alert for meetings starting within
//! the lookahead window. The re-invocation cadence belongs to the caller
//! (a timer or a request cycle), not to this module.

use agendahub_domain::constants::UPCOMING_WINDOW_MINUTES;
use agendahub_domain::{Meeting, Notification, NotificationKind};
use chrono::NaiveDateTime;
use tracing::debug;

/// In-memory notification list with idempotent sweeps
#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan for meetings starting within the lookahead window and add an
    /// alert for each one that does not already have one. Re-running with
    /// unchanged inputs is a no-op (dedup by derived id, set union).
    /// Returns how many alerts were added.
    pub fn sweep(&mut self, meetings: &[Meeting], now: NaiveDateTime) -> usize {
        let mut added = 0;
        for meeting in meetings {
            let minutes = (meeting.starts_at() - now).num_minutes();
            if minutes <= 0 || minutes > UPCOMING_WINDOW_MINUTES {
                continue;
            }

            let id = upcoming_id(meeting);
            if self.notifications.iter().any(|n| n.id == id) {
                continue;
            }

            self.notifications.push(Notification {
                id,
                kind: NotificationKind::Upcoming,
                message: format!(
                    "Meeting \"{}\" starts in {} minutes",
                    meeting.title, minutes
                ),
                minutes_until_start: minutes,
                meeting: meeting.clone(),
                created_at: now,
                read: false,
            });
            added += 1;
        }

        if added > 0 {
            debug!(added, "notification sweep produced new alerts");
        }
        added
    }

    /// Toggle a notification's read flag on. Returns false for unknown ids.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Remove a notification entirely. Returns false for unknown ids.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() < before
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Snapshot for the API boundary
    pub fn list(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Derived identifier for a meeting's upcoming alert
fn upcoming_id(meeting: &Meeting) -> String {
    format!("{}-upcoming", meeting.id)
}
