use crate::model::CommitEvent;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use derive_more::Constructor;
use std::collections::BTreeSet;

/// Runs of consecutive calendar days holding at least one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Constructor)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Calculates the longest and the still active commit streaks.
///
/// Commits are truncated to calendar days in `time_zone`. The latest run counts as current only while its last day
/// is the day of `now` or the day before.
pub fn calculate_streaks(commits: &[CommitEvent], now: &DateTime<Utc>, time_zone: &FixedOffset) -> Streaks {
    let days: Vec<NaiveDate> = commits
        .iter()
        .map(|commit| commit.local(time_zone).date_naive())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let most_recent_day = match days.last() {
        Some(day) => *day,
        None => return Streaks::default(),
    };

    let today = now.with_timezone(time_zone).date_naive();
    let current = if most_recent_day == today || today.pred_opt() == Some(most_recent_day) {
        trailing_run(&days)
    } else {
        0
    };
    Streaks::new(current, longest_run(&days))
}

fn longest_run(days: &[NaiveDate]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        run = match previous {
            Some(previous) if is_next_day(previous, *day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*day);
    }
    longest
}

/// Length of the run ending at the last of the sorted, non empty `days`.
fn trailing_run(days: &[NaiveDate]) -> u32 {
    let preceding = days
        .windows(2)
        .rev()
        .take_while(|pair| is_next_day(pair[0], pair[1]))
        .count();
    1 + preceding as u32
}

fn is_next_day(day: NaiveDate, next: NaiveDate) -> bool {
    day.succ_opt() == Some(next)
}
