//! Demo meeting roster loaded on first start.
//!
//! Mirrors the sample data the web client ships with so the calendar is not
//! empty before the first submission.

use agendahub_domain::{Meeting, Platform, Recurrence};
use chrono::{NaiveDate, NaiveTime};

/// The six demo meetings, in insertion order.
pub fn demo_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: "1".into(),
            title: "Weekly Team Standup".into(),
            date: day(2024, 6, 25),
            time: clock(9, 0),
            platform: Platform::Microsoft,
            participants: emails(&["john@company.com", "sarah@company.com", "mike@company.com"]),
            agenda: Some("Review progress, discuss blockers, plan upcoming sprint".into()),
            recurrence: Recurrence::Weekly,
            link: Some("https://teams.microsoft.com/meeting/123".into()),
        },
        Meeting {
            id: "2".into(),
            title: "Product Strategy Meeting".into(),
            date: day(2024, 6, 26),
            time: clock(14, 30),
            platform: Platform::Zoom,
            participants: emails(&["ceo@company.com", "product@company.com"]),
            agenda: Some("Q3 roadmap planning and feature prioritization".into()),
            recurrence: Recurrence::None,
            link: Some("https://zoom.us/j/123456789".into()),
        },
        Meeting {
            id: "3".into(),
            title: "Client Presentation".into(),
            date: day(2024, 6, 27),
            time: clock(11, 0),
            platform: Platform::Google,
            participants: emails(&["client@external.com", "sales@company.com"]),
            agenda: Some("Demo new features and discuss contract renewal".into()),
            recurrence: Recurrence::None,
            link: Some("https://meet.google.com/abc-defg-hij".into()),
        },
        Meeting {
            id: "4".into(),
            title: "Engineering Review".into(),
            date: day(2024, 6, 28),
            time: clock(16, 0),
            platform: Platform::Microsoft,
            participants: emails(&["dev1@company.com", "dev2@company.com", "lead@company.com"]),
            agenda: Some("Code review and architecture discussion".into()),
            recurrence: Recurrence::None,
            link: Some("https://teams.microsoft.com/meeting/456".into()),
        },
        Meeting {
            id: "5".into(),
            title: "Marketing Campaign Planning".into(),
            date: day(2024, 6, 24),
            time: clock(10, 30),
            platform: Platform::Zoom,
            participants: emails(&["marketing@company.com", "design@company.com"]),
            agenda: Some("Plan upcoming product launch campaign".into()),
            recurrence: Recurrence::None,
            link: Some("https://zoom.us/j/987654321".into()),
        },
        Meeting {
            id: "6".into(),
            title: "1:1 with Manager".into(),
            date: day(2024, 6, 25),
            time: clock(15, 0),
            platform: Platform::Google,
            participants: emails(&["manager@company.com"]),
            agenda: Some("Career development and feedback session".into()),
            recurrence: Recurrence::Weekly,
            link: None,
        },
    ]
}

// Literals below are valid calendar values.
fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn emails(addresses: &[&str]) -> Vec<String> {
    addresses.iter().map(|a| (*a).to_string()).collect()
}
