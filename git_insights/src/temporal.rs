use crate::frequency::{mode, tally};
use crate::model::{CommitEvent, HourOfDay, Weekday};
use chrono::{Datelike, FixedOffset};

/// Most frequent commit weekday and hour, `None` when there is nothing to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemporalModes {
    pub weekday: Option<Weekday>,
    pub hour: Option<HourOfDay>,
}

/// Buckets commits by weekday and by hour of day as seen from `time_zone`.
///
/// Ties resolve to the earliest weekday (Monday first) and the lowest hour.
pub fn temporal_modes(commits: &[CommitEvent], time_zone: &FixedOffset) -> TemporalModes {
    let weekdays = tally(
        commits
            .iter()
            .map(|commit| Weekday::from(commit.local(time_zone).weekday())),
    );
    let hours = tally(commits.iter().map(|commit| HourOfDay::of(&commit.local(time_zone))));
    TemporalModes {
        weekday: mode(&weekdays),
        hour: mode(&hours),
    }
}
