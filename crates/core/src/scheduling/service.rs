//! Meeting intake service - core business logic

use std::sync::Arc;

use agendahub_domain::constants::TIME_FORMAT;
use agendahub_domain::validation;
use agendahub_domain::{Meeting, MeetingDraft, Result};
use tracing::{info, instrument};
use uuid::Uuid;

use super::ports::MeetingRepository;

/// Meeting intake and store access
pub struct SchedulingService {
    repository: Arc<dyn MeetingRepository>,
}

impl SchedulingService {
    /// Create a new scheduling service
    pub fn new(repository: Arc<dyn MeetingRepository>) -> Self {
        Self { repository }
    }

    /// Validate a submitted draft and append the resulting meeting.
    ///
    /// Either every field passes and the meeting is stored, or the draft is
    /// rejected with the full set of field errors and nothing is written.
    /// The generated identifier is time-ordered, not collision-checked.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn schedule(&self, draft: &MeetingDraft) -> Result<Meeting> {
        let fields = validation::validate_meeting(draft)?;

        let meeting = Meeting {
            id: Uuid::now_v7().to_string(),
            title: fields.title,
            date: fields.date,
            time: fields.time,
            platform: fields.platform,
            participants: fields.participants,
            agenda: fields.agenda,
            recurrence: fields.recurrence,
            link: fields.link,
        };

        self.repository.add(meeting.clone()).await?;
        info!(
            meeting_id = %meeting.id,
            date = %meeting.date,
            platform = %meeting.platform,
            "meeting scheduled"
        );
        Ok(meeting)
    }

    /// All stored meetings in insertion order
    pub async fn list(&self) -> Result<Vec<Meeting>> {
        self.repository.list().await
    }

    /// Confirmation line shown to the submitting user
    pub fn confirmation(meeting: &Meeting) -> String {
        format!(
            "{} has been scheduled for {} at {}",
            meeting.title,
            meeting.date,
            meeting.time.format(TIME_FORMAT)
        )
    }
}
