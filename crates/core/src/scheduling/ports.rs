//! Port interfaces for the meeting store
//!
//! These traits define the boundary between core business logic and
//! infrastructure implementations.

use agendahub_domain::{Meeting, Result};
use async_trait::async_trait;

/// Append-only store of scheduled meetings.
///
/// There is no update or delete operation; records live until the process
/// exits. Duplicate date+time+platform bookings are not rejected here.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Append a meeting to the store
    async fn add(&self, meeting: Meeting) -> Result<()>;

    /// All meetings in insertion order
    async fn list(&self) -> Result<Vec<Meeting>>;
}
