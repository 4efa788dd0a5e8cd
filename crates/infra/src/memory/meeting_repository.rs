//! In-memory implementation of the MeetingRepository port.
//!
//! Meetings live for the lifetime of the process; there is no persistence
//! and no delete path. The single event-processing flow is the only writer,
//! the lock exists because the HTTP surface and the reminder job share the
//! handle.

use agendahub_core::MeetingRepository;
use agendahub_domain::{Meeting, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

/// Process-lifetime meeting store
#[derive(Debug, Default)]
pub struct InMemoryMeetingRepository {
    meetings: RwLock<Vec<Meeting>>,
}

impl InMemoryMeetingRepository {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given roster
    pub fn with_seed(meetings: Vec<Meeting>) -> Self {
        debug!(count = meetings.len(), "seeding meeting store");
        Self { meetings: RwLock::new(meetings) }
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingRepository {
    async fn add(&self, meeting: Meeting) -> Result<()> {
        self.meetings.write().push(meeting);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Meeting>> {
        Ok(self.meetings.read().clone())
    }
}
