//! Monthly calendar projection and month navigation

mod projector;

pub use projector::{project, DayCell, MonthCursor, MonthGrid, MonthSummary};
