//! Dashboard summary counts

use agendahub_domain::Meeting;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Meeting counts shown on the landing dashboard
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub today_count: usize,
    pub week_count: usize,
}

/// Count meetings scheduled today and within the Sunday..Saturday week
/// containing `today`.
pub fn summarize(meetings: &[Meeting], today: NaiveDate) -> DashboardSummary {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let week_end = week_start + Duration::days(6);

    let today_count = meetings.iter().filter(|m| m.date == today).count();
    let week_count =
        meetings.iter().filter(|m| m.date >= week_start && m.date <= week_end).count();

    DashboardSummary { today_count, week_count }
}

/// Greeting bucket for the dashboard header.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use agendahub_domain::{Platform, Recurrence};
    use chrono::NaiveTime;

    use super::*;

    fn meeting_on(date: NaiveDate) -> Meeting {
        Meeting {
            id: date.to_string(),
            title: "m".into(),
            date,
            time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            platform: Platform::Google,
            participants: vec![],
            agenda: None,
            recurrence: Recurrence::None,
            link: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn week_spans_sunday_to_saturday() {
        // 2024-06-25 is a Tuesday; its week runs June 23 (Sun) - June 29 (Sat).
        let meetings = vec![
            meeting_on(day(2024, 6, 23)),
            meeting_on(day(2024, 6, 25)),
            meeting_on(day(2024, 6, 29)),
            meeting_on(day(2024, 6, 30)),
            meeting_on(day(2024, 6, 22)),
        ];

        let summary = summarize(&meetings, day(2024, 6, 25));
        assert_eq!(summary, DashboardSummary { today_count: 1, week_count: 3 });
    }

    #[test]
    fn counts_are_zero_without_meetings() {
        let summary = summarize(&[], day(2024, 6, 25));
        assert_eq!(summary, DashboardSummary { today_count: 0, week_count: 0 });
    }

    #[test]
    fn greeting_buckets_by_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }
}
