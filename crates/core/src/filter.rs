//! Platform filter state.
//!
//! A set of enabled calendar-source tags that narrows the visible meeting
//! subset. An empty set is a legal state that simply hides every meeting.

use std::collections::BTreeSet;

use agendahub_domain::{Meeting, Platform};
use serde::Serialize;

/// Set of platforms currently visible in calendar views
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlatformFilter {
    enabled: BTreeSet<Platform>,
}

impl Default for PlatformFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl PlatformFilter {
    /// Filter with every platform enabled (the initial UI state).
    pub fn all() -> Self {
        Self { enabled: Platform::ALL.into_iter().collect() }
    }

    /// Filter with no platform enabled; hides every meeting.
    pub fn none() -> Self {
        Self { enabled: BTreeSet::new() }
    }

    /// Add the platform if absent, remove it if present.
    pub fn toggle(&mut self, platform: Platform) {
        if !self.enabled.remove(&platform) {
            self.enabled.insert(platform);
        }
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        self.enabled.contains(&platform)
    }

    /// Pure intersection predicate against a meeting's platform tag.
    pub fn allows(&self, meeting: &Meeting) -> bool {
        self.enabled.contains(&meeting.platform)
    }

    /// Enabled platforms in display order
    pub fn enabled(&self) -> impl Iterator<Item = Platform> + '_ {
        self.enabled.iter().copied()
    }

    /// Narrow a meeting list to the enabled subset, preserving order.
    pub fn apply<'a>(&self, meetings: &'a [Meeting]) -> Vec<&'a Meeting> {
        meetings.iter().filter(|m| self.allows(m)).collect()
    }
}
