//! Integration flow: intake -> store -> filter -> projection
//!
//! Exercises the full data path a submission travels, without any
//! infrastructure adapters involved.

use std::sync::Arc;

use agendahub_core::{project, MeetingRepository, MonthCursor, PlatformFilter, SchedulingService};
use agendahub_domain::{Meeting, MeetingDraft, Platform, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
struct MemoryStore {
    meetings: RwLock<Vec<Meeting>>,
}

#[async_trait]
impl MeetingRepository for MemoryStore {
    async fn add(&self, meeting: Meeting) -> Result<()> {
        self.meetings.write().push(meeting);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Meeting>> {
        Ok(self.meetings.read().clone())
    }
}

#[tokio::test]
async fn submitted_standup_lands_in_its_day_bucket_only() {
    let service = SchedulingService::new(Arc::new(MemoryStore::default()));

    let draft = MeetingDraft {
        title: "Standup".into(),
        date: "2024-06-25".into(),
        time: "09:00".into(),
        platform: "microsoft".into(),
        participants: "a@x.com, b@x.com".into(),
        ..MeetingDraft::default()
    };
    let meeting = service.schedule(&draft).await.expect("draft is valid");
    assert_eq!(meeting.participants, vec!["a@x.com", "b@x.com"]);

    let stored = service.list().await.expect("list never fails");
    let june = MonthCursor::new(2024, 5).expect("valid month index");

    // Visible while microsoft is enabled, and only on June 25.
    let grid = project(june, &stored, &PlatformFilter::all());
    for cell in &grid.cells {
        let expected = usize::from(cell.day == 25);
        assert_eq!(cell.meetings.len(), expected, "day {}", cell.day);
    }

    // Toggling microsoft off removes it from the projected grid entirely.
    let mut filter = PlatformFilter::all();
    filter.toggle(Platform::Microsoft);
    let grid = project(june, &stored, &filter);
    assert!(grid.cells.iter().all(|c| c.meetings.is_empty()));
}
