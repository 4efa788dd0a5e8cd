//! Field-level validation for form submissions.
//!
//! Every rule for a submission is checked before returning, so a single
//! rejected draft reports all failing fields at once. Validation failures
//! surface to the submitting caller only and are never logged as faults.

use chrono::{NaiveDate, NaiveTime};
use url::Url;

use crate::constants::{
    AGENDA_MAX_CHARS, CHAT_MESSAGE_MAX_CHARS, DATE_FORMAT, PASSWORD_MIN_CHARS,
    PROFILE_NAME_MAX_CHARS, TIME_FORMAT, TITLE_MAX_CHARS,
};
use crate::errors::{AgendaError, FieldError, Result};
use crate::types::{MeetingDraft, Platform, ProfileUpdate, Recurrence};

/// Accumulates field errors across a single submission
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok when no field failed, the accumulated validation error otherwise.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AgendaError::Validation(self.errors))
        }
    }
}

/// Validated and normalized meeting fields, ready for assembly
#[derive(Debug, Clone)]
pub struct ValidMeeting {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub platform: Platform,
    pub participants: Vec<String>,
    pub agenda: Option<String>,
    pub recurrence: Recurrence,
    pub link: Option<String>,
}

/// Validate a meeting draft, reporting every failing field.
pub fn validate_meeting(draft: &MeetingDraft) -> Result<ValidMeeting> {
    let mut errors = FieldErrors::default();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push("title", "Meeting title is required");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push("title", "Title too long");
    }

    let date = parse_date(&draft.date, &mut errors);
    let time = parse_time(&draft.time, &mut errors);
    let platform = parse_platform(&draft.platform, &mut errors);

    let agenda = match normalize_optional(draft.agenda.as_deref()) {
        Some(text) if text.chars().count() > AGENDA_MAX_CHARS => {
            errors.push("agenda", "Agenda too long");
            None
        }
        other => other,
    };

    let recurrence = match normalize_optional(draft.recurrence.as_deref()) {
        None => Recurrence::None,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.push("recurrence", "Unknown recurrence");
            Recurrence::None
        }),
    };

    let link = match normalize_optional(draft.link.as_deref()) {
        Some(raw) => {
            if Url::parse(&raw).is_err() {
                errors.push("link", "Enter a valid meeting link");
                None
            } else {
                Some(raw)
            }
        }
        None => None,
    };

    let participants = split_participants(&draft.participants);

    errors.into_result()?;

    match (date, time, platform) {
        (Some(date), Some(time), Some(platform)) => Ok(ValidMeeting {
            title: title.to_string(),
            date,
            time,
            platform,
            participants,
            agenda,
            recurrence,
            link,
        }),
        // Unreachable once into_result passed; kept as a guard.
        _ => Err(AgendaError::Internal("validation accounting mismatch".into())),
    }
}

/// Split a comma-delimited participant string, trimming whitespace and
/// dropping empty entries.
pub fn split_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Validate sign-in / sign-up input before calling the auth service.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let mut errors = FieldErrors::default();
    if !is_valid_email(email.trim()) {
        errors.push("email", "Please enter a valid email address");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result()
}

/// Validate a profile update before delegating it to the auth service.
pub fn validate_profile(update: &ProfileUpdate) -> Result<()> {
    let mut errors = FieldErrors::default();
    let name = update.name.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    } else if name.chars().count() > PROFILE_NAME_MAX_CHARS {
        errors.push("name", "Name too long");
    }
    if update.timezone.trim().is_empty() {
        errors.push("timezone", "Timezone is required");
    }
    errors.into_result()
}

/// Validate a chat message body.
pub fn validate_chat_message(content: &str) -> Result<()> {
    let mut errors = FieldErrors::default();
    if content.trim().is_empty() {
        errors.push("message", "Message cannot be empty");
    } else if content.chars().count() > CHAT_MESSAGE_MAX_CHARS {
        errors.push("message", "Message too long");
    }
    errors.into_result()
}

fn parse_date(raw: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push("date", "Date is required");
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("date", "Enter a valid date (YYYY-MM-DD)");
            None
        }
    }
}

fn parse_time(raw: &str, errors: &mut FieldErrors) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push("time", "Time is required");
        return None;
    }
    match NaiveTime::parse_from_str(trimmed, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(_) => {
            errors.push("time", "Enter a valid time (HH:MM)");
            None
        }
    }
}

fn parse_platform(raw: &str, errors: &mut FieldErrors) -> Option<Platform> {
    match raw.trim().parse() {
        Ok(platform) => Some(platform),
        Err(_) => {
            errors.push("platform", "Please select a platform");
            None
        }
    }
}

fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty()) && domain.contains('.')
}
