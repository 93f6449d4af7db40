use crate::model::{CommitEvent, Weekday};
use chrono::{Datelike, FixedOffset};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Commits per weekday, always holding all seven days in Monday..Sunday order.
pub type WeeklyDistribution = BTreeMap<Weekday, u32>;

pub fn weekly_distribution(commits: &[CommitEvent], time_zone: &FixedOffset) -> WeeklyDistribution {
    let mut distribution: WeeklyDistribution = Weekday::iter().map(|weekday| (weekday, 0)).collect();
    for commit in commits {
        let weekday = Weekday::from(commit.local(time_zone).weekday());
        *distribution.entry(weekday).or_insert(0) += 1;
    }
    distribution
}

/// Tests

#[test]
fn empty_distribution_test() {
    let distribution = weekly_distribution(&[], &FixedOffset::east_opt(0).unwrap());
    assert_eq!(distribution.len(), 7);
    assert!(distribution.values().all(|count| *count == 0));
    assert_eq!(distribution.keys().next(), Some(&Weekday::Monday));
    assert_eq!(distribution.keys().last(), Some(&Weekday::Sunday));
}

#[test]
fn distribution_counts_test() {
    let commits: Vec<CommitEvent> = [
        "2023-11-12T08:00:00Z",
        "2023-11-12T09:00:00Z",
        "2023-11-13T10:00:00Z",
        "2023-11-15T10:00:00Z",
    ]
    .iter()
    .map(|timestamp| CommitEvent::new(chrono::DateTime::parse_from_rfc3339(timestamp).unwrap()))
    .collect();
    let distribution = weekly_distribution(&commits, &FixedOffset::east_opt(0).unwrap());
    assert_eq!(distribution[&Weekday::Sunday], 2);
    assert_eq!(distribution[&Weekday::Monday], 1);
    assert_eq!(distribution[&Weekday::Wednesday], 1);
    assert_eq!(distribution[&Weekday::Friday], 0);
    assert_eq!(distribution.values().sum::<u32>(), 4);
}
