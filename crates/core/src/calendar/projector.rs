//! Monthly calendar projection.
//!
//! Maps a (year, month) target plus the filtered meeting subset onto a
//! 7-column grid: leading blank cells up to the weekday of the 1st
//! (0 = Sunday), then one cell per day of the month. Meetings land in the
//! cell whose calendar date equals theirs exactly, in insertion order.

use agendahub_domain::constants::DAY_CELL_VISIBLE_LIMIT;
use agendahub_domain::Meeting;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::filter::PlatformFilter;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month under projection, identified by year and zero-based month index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based month index, kept in [0, 11] by construction.
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 <= 11).then_some(Self { year, month0 })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // month0 is kept in [0, 11] by construction
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Day count, computed via day zero of the following month.
    pub fn days_in_month(&self) -> u32 {
        self.next().first_day().pred_opt().map_or(28, |last| last.day())
    }

    /// Previous month; underflows into December of the prior year.
    pub fn prev(&self) -> Self {
        Self::normalized(self.year, self.month0 as i32 - 1)
    }

    /// Next month; overflows into January of the following year.
    pub fn next(&self) -> Self {
        Self::normalized(self.year, self.month0 as i32 + 1)
    }

    /// Header label, e.g. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }

    fn normalized(year: i32, month_index: i32) -> Self {
        Self {
            year: year + month_index.div_euclid(12),
            month0: month_index.rem_euclid(12) as u32,
        }
    }
}

/// One day cell with its meeting bucket in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub meetings: Vec<Meeting>,
}

impl DayCell {
    /// Meetings shown inline; the rest fold into the overflow counter.
    /// Presentation policy only - the bucket itself is complete.
    pub fn visible(&self) -> &[Meeting] {
        &self.meetings[..self.meetings.len().min(DAY_CELL_VISIBLE_LIMIT)]
    }

    /// Count of meetings beyond the inline display cap.
    pub fn overflow(&self) -> usize {
        self.meetings.len().saturating_sub(DAY_CELL_VISIBLE_LIMIT)
    }
}

/// Projected month: leading blanks plus one cell per day
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub label: String,
    /// Blank cells before day 1; equals the weekday index of the 1st
    /// (0 = Sunday), so always in [0, 6].
    pub leading_blanks: usize,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Total grid length: leading blanks plus one cell per day.
    pub fn len(&self) -> usize {
        self.leading_blanks + self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell for a one-based day of the month, if it exists.
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.get(day.checked_sub(1)? as usize)
    }

    /// Total and upcoming counts for the projected subset.
    pub fn summary(&self, today: NaiveDate) -> MonthSummary {
        let total = self.cells.iter().map(|c| c.meetings.len()).sum();
        let upcoming = self
            .cells
            .iter()
            .flat_map(|c| &c.meetings)
            .filter(|m| m.date >= today)
            .count();
        MonthSummary { total, upcoming }
    }
}

/// Header counts for the projected month
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonthSummary {
    pub total: usize,
    pub upcoming: usize,
}

/// Project the filtered meeting subset onto the month's grid.
pub fn project(cursor: MonthCursor, meetings: &[Meeting], filter: &PlatformFilter) -> MonthGrid {
    let first = cursor.first_day();
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let days = cursor.days_in_month();

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let Some(date) = first.with_day(day) else {
            continue;
        };
        let bucket = meetings
            .iter()
            .filter(|m| filter.allows(m) && m.date == date)
            .cloned()
            .collect();
        cells.push(DayCell { date, day, meetings: bucket });
    }

    MonthGrid { cursor, label: cursor.label(), leading_blanks, cells }
}

#[cfg(test)]
mod tests {
    use agendahub_domain::{Platform, Recurrence};
    use chrono::NaiveTime;

    use super::*;

    fn meeting(id: &str, date: NaiveDate, platform: Platform) -> Meeting {
        Meeting {
            id: id.into(),
            title: format!("Meeting {id}"),
            date,
            time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            platform,
            participants: vec![],
            agenda: None,
            recurrence: Recurrence::None,
            link: None,
        }
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).expect("valid date")
    }

    #[test]
    fn grid_length_is_blanks_plus_days() {
        // June 1st 2024 is a Saturday: six leading blanks, thirty days.
        let cursor = MonthCursor::new(2024, 5).expect("june");
        let grid = project(cursor, &[], &PlatformFilter::all());

        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.cells.len(), 30);
        assert_eq!(grid.len(), 36);
    }

    #[test]
    fn leading_blanks_stay_in_weekday_range() {
        let mut cursor = MonthCursor::new(2023, 0).expect("january");
        for _ in 0..48 {
            let grid = project(cursor, &[], &PlatformFilter::all());
            assert!(grid.leading_blanks <= 6);
            assert_eq!(grid.len(), grid.leading_blanks + cursor.days_in_month() as usize);
            cursor = cursor.next();
        }
    }

    #[test]
    fn leap_february_has_twenty_nine_cells() {
        let cursor = MonthCursor::new(2024, 1).expect("february");
        assert_eq!(cursor.days_in_month(), 29);
        assert_eq!(MonthCursor::new(2023, 1).expect("february").days_in_month(), 28);
    }

    #[test]
    fn meetings_bucket_by_exact_date_only() {
        let meetings = vec![
            meeting("a", june(25), Platform::Microsoft),
            meeting("b", june(25), Platform::Google),
            meeting("c", june(26), Platform::Zoom),
        ];
        let grid = project(MonthCursor::new(2024, 5).expect("june"), &meetings, &PlatformFilter::all());

        let day25 = grid.cell(25).expect("cell exists");
        let ids: Vec<_> = day25.meetings.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(grid.cell(26).expect("cell exists").meetings.len(), 1);
        assert!(grid.cell(24).expect("cell exists").meetings.is_empty());
    }

    #[test]
    fn day_cell_caps_inline_display_at_three() {
        let meetings: Vec<_> =
            (0..5).map(|i| meeting(&format!("m{i}"), june(25), Platform::Zoom)).collect();
        let grid = project(MonthCursor::new(2024, 5).expect("june"), &meetings, &PlatformFilter::all());

        let cell = grid.cell(25).expect("cell exists");
        assert_eq!(cell.meetings.len(), 5);
        assert_eq!(cell.visible().len(), 3);
        assert_eq!(cell.overflow(), 2);
        // Insertion order is preserved, both inline and in the bucket.
        assert_eq!(cell.visible()[0].id, "m0");
    }

    #[test]
    fn disabled_platform_disappears_from_the_grid() {
        let meetings = vec![meeting("a", june(25), Platform::Microsoft)];
        let mut filter = PlatformFilter::all();

        let grid = project(MonthCursor::new(2024, 5).expect("june"), &meetings, &filter);
        assert_eq!(grid.cell(25).expect("cell exists").meetings.len(), 1);

        filter.toggle(Platform::Microsoft);
        let grid = project(MonthCursor::new(2024, 5).expect("june"), &meetings, &filter);
        assert!(grid.cell(25).expect("cell exists").meetings.is_empty());
    }

    #[test]
    fn empty_filter_empties_every_bucket() {
        let meetings = vec![
            meeting("a", june(1), Platform::Google),
            meeting("b", june(15), Platform::Microsoft),
            meeting("c", june(30), Platform::Zoom),
        ];
        let grid =
            project(MonthCursor::new(2024, 5).expect("june"), &meetings, &PlatformFilter::none());
        assert!(grid.cells.iter().all(|c| c.meetings.is_empty()));
    }

    #[test]
    fn navigation_rolls_over_year_boundaries() {
        let december = MonthCursor::new(2024, 11).expect("december");
        assert_eq!(december.next(), MonthCursor { year: 2025, month0: 0 });

        let january = MonthCursor::new(2024, 0).expect("january");
        assert_eq!(january.prev(), MonthCursor { year: 2023, month0: 11 });

        // prev then next restores the cursor.
        assert_eq!(january.prev().next(), january);
    }

    #[test]
    fn label_names_month_and_year() {
        assert_eq!(MonthCursor::new(2024, 5).expect("june").label(), "June 2024");
    }

    #[test]
    fn summary_counts_total_and_upcoming() {
        let meetings = vec![
            meeting("past", june(10), Platform::Google),
            meeting("today", june(25), Platform::Microsoft),
            meeting("future", june(28), Platform::Zoom),
        ];
        let grid = project(MonthCursor::new(2024, 5).expect("june"), &meetings, &PlatformFilter::all());
        let summary = grid.summary(june(25));
        assert_eq!(summary, MonthSummary { total: 3, upcoming: 2 });
    }
}
