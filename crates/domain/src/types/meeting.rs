//! Meeting records and the closed platform/recurrence enumerations

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Calendar/video-conferencing source of a meeting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Microsoft,
    Zoom,
}

impl Platform {
    /// The closed enumeration, in display order.
    pub const ALL: [Self; 3] = [Self::Google, Self::Microsoft, Self::Zoom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Microsoft => "microsoft",
            Self::Zoom => "zoom",
        }
    }

    /// Human-readable product name shown in pickers and status bars.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google Meet",
            Self::Microsoft => "Microsoft Teams",
            Self::Zoom => "Zoom",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "microsoft" => Ok(Self::Microsoft),
            "zoom" => Ok(Self::Zoom),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Recurrence cadence of a meeting
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!("unknown recurrence: {other}")),
        }
    }
}

/// A scheduled meeting.
///
/// Date and time are naive wall-clock values; the model carries no time
/// zone. Records are never mutated in place and there is no delete
/// operation. Duplicate date+time+platform bookings are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::utils::time_format")]
    pub time: NaiveTime,
    pub platform: Platform,
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Meeting {
    /// Combined wall-clock start of the meeting.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Raw form input accepted by meeting intake.
///
/// Participants arrive as a single comma-delimited string; everything is
/// validated and normalized before a `Meeting` is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub participants: String,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
