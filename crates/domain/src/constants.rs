//! Domain constants and limits

/// Maximum meeting title length accepted at intake
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum agenda text length accepted at intake
pub const AGENDA_MAX_CHARS: usize = 500;

/// Maximum chat message length
pub const CHAT_MESSAGE_MAX_CHARS: usize = 1000;

/// Maximum profile display name length
pub const PROFILE_NAME_MAX_CHARS: usize = 50;

/// Minimum password length enforced before calling the auth service
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Lookahead window for upcoming-meeting notifications
pub const UPCOMING_WINDOW_MINUTES: i64 = 15;

/// Remaining minutes under which an upcoming notification counts as urgent
pub const URGENT_WINDOW_MINUTES: i64 = 5;

/// Meetings shown inline per day cell before the overflow counter kicks in
pub const DAY_CELL_VISIBLE_LIMIT: usize = 3;

/// Calendar date format used on every external boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock time format used on every external boundary
pub const TIME_FORMAT: &str = "%H:%M";
