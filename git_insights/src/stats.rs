use crate::account_age::{account_age, AccountAge};
use crate::api::Result;
use crate::histogram::{weekly_distribution, WeeklyDistribution};
use crate::languages::{checked_total, language_entries, ExcludedLanguages};
use crate::model::{CommitEvent, HourOfDay, LanguageBytes, LanguageEntry, Weekday};
use crate::streaks::calculate_streaks;
use crate::temporal::temporal_modes;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::debug;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

pub const DEFAULT_MAX_VISIBLE_LANGUAGES: usize = 5;

/// Shown in place of a weekday or hour when there were no commits to count.
pub const NOT_AVAILABLE: &str = "N/A";

/// Zone in which days and hours are bucketed unless configured otherwise.
pub fn default_time_zone() -> FixedOffset {
    Utc.fix()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsOptions {
    pub max_visible_languages: usize,
    pub excluded_languages: ExcludedLanguages,
    pub time_zone: FixedOffset,
}

impl Default for StatsOptions {
    fn default() -> Self {
        StatsOptions {
            max_visible_languages: DEFAULT_MAX_VISIBLE_LANGUAGES,
            excluded_languages: ExcludedLanguages::default(),
            time_zone: default_time_zone(),
        }
    }
}

impl StatsOptions {
    pub fn with_max_visible_languages(mut self, max_visible_languages: usize) -> Self {
        self.max_visible_languages = max_visible_languages;
        self
    }

    pub fn with_excluded_languages(mut self, excluded_languages: ExcludedLanguages) -> Self {
        self.excluded_languages = excluded_languages;
        self
    }

    pub fn with_time_zone(mut self, time_zone: FixedOffset) -> Self {
        self.time_zone = time_zone;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStatistics {
    pub languages: Vec<LanguageEntry>,
    /// Bytes of every language, excluded ones included.
    pub total_bytes: u64,
    #[serde(serialize_with = "serialize_or_not_available")]
    pub most_productive_day: Option<Weekday>,
    #[serde(serialize_with = "serialize_or_not_available")]
    pub most_productive_hour: Option<HourOfDay>,
    #[serde(serialize_with = "serialize_display")]
    pub account_age: AccountAge,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly_distribution: WeeklyDistribution,
    pub computed_at: DateTime<Utc>,
}

impl ProfileStatistics {
    pub fn most_productive_day_label(&self) -> String {
        or_not_available(&self.most_productive_day)
    }

    pub fn most_productive_hour_label(&self) -> String {
        or_not_available(&self.most_productive_hour)
    }
}

impl Display for ProfileStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "languages:")?;
        for language in &self.languages {
            writeln!(
                f,
                "\t{}\t{:.2}%\t{} bytes",
                language.name, language.percentage, language.bytes
            )?;
        }
        writeln!(f, "total bytes: {}", self.total_bytes)?;
        writeln!(f, "most productive day: {}", self.most_productive_day_label())?;
        writeln!(f, "most productive hour: {}", self.most_productive_hour_label())?;
        writeln!(f, "account age: {}", self.account_age)?;
        writeln!(f, "current streak: {} days", self.current_streak)?;
        writeln!(f, "longest streak: {} days", self.longest_streak)?;
        writeln!(f, "weekly distribution:")?;
        for (weekday, commits) in &self.weekly_distribution {
            writeln!(f, "\t{}\t{}", weekday, commits)?;
        }
        write!(f, "computed at: {}", self.computed_at.to_rfc3339())
    }
}

/// Derives every profile statistic from already fetched activity.
///
/// Inputs are only read. Each metric is computed independently of the others, and degenerate input (no languages,
/// no commits) yields empty or `N/A` values rather than errors.
///
/// # Arguments
/// * `language_bytes` - Bytes per language
/// * `commits` - Commits in any order, duplicates allowed
/// * `account_created_at` - Creation time of the account, not later than `now`
/// * `options` - Language cutoff, exclusions and the time zone used for day and hour buckets
/// * `now` - Reference time for the current streak and the account age
pub fn compute_profile_statistics(
    language_bytes: &LanguageBytes,
    commits: &[CommitEvent],
    account_created_at: &DateTime<Utc>,
    options: &StatsOptions,
    now: DateTime<Utc>,
) -> Result<ProfileStatistics> {
    let total_bytes = checked_total(language_bytes.values().copied())?;
    let languages = language_entries(
        language_bytes,
        options.max_visible_languages,
        &options.excluded_languages,
    )?;
    let account_age = account_age(account_created_at, &now, &options.time_zone)?;
    let modes = temporal_modes(commits, &options.time_zone);
    let streaks = calculate_streaks(commits, &now, &options.time_zone);
    let weekly_distribution = weekly_distribution(commits, &options.time_zone);
    debug!(
        "Computed statistics over {} commits: streaks {:?}, modes {:?}",
        commits.len(),
        streaks,
        modes
    );

    Ok(ProfileStatistics {
        languages,
        total_bytes,
        most_productive_day: modes.weekday,
        most_productive_hour: modes.hour,
        account_age,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        weekly_distribution,
        computed_at: now,
    })
}

fn or_not_available<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

fn serialize_or_not_available<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(&or_not_available(value))
}

fn serialize_display<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Error;

    fn at(timestamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(timestamp).unwrap().with_timezone(&Utc)
    }

    fn commits(timestamps: &[&str]) -> Vec<CommitEvent> {
        timestamps
            .iter()
            .map(|timestamp| CommitEvent::new(DateTime::parse_from_rfc3339(timestamp).unwrap()))
            .collect()
    }

    fn languages(entries: &[(&str, u64)]) -> LanguageBytes {
        entries.iter().map(|(name, bytes)| (name.to_string(), *bytes)).collect()
    }

    #[test]
    fn empty_activity_test() {
        let now = at("2023-11-10T12:00:00Z");
        let statistics = compute_profile_statistics(
            &LanguageBytes::new(),
            &[],
            &at("2023-11-01T00:00:00Z"),
            &StatsOptions::default(),
            now,
        )
        .unwrap();
        assert!(statistics.languages.is_empty());
        assert_eq!(statistics.total_bytes, 0);
        assert_eq!(statistics.most_productive_day_label(), NOT_AVAILABLE);
        assert_eq!(statistics.most_productive_hour_label(), NOT_AVAILABLE);
        assert_eq!(statistics.current_streak, 0);
        assert_eq!(statistics.longest_streak, 0);
        assert_eq!(statistics.weekly_distribution.len(), 7);
        assert!(statistics.weekly_distribution.values().all(|count| *count == 0));
        assert_eq!(statistics.account_age.to_string(), "9 days");
        assert_eq!(statistics.computed_at, now);
    }

    #[test]
    fn full_activity_test() {
        let options = StatsOptions::default()
            .with_max_visible_languages(2)
            .with_excluded_languages("css".parse().unwrap());
        let statistics = compute_profile_statistics(
            &languages(&[("Rust", 1000), ("Go", 500), ("Lua", 300), ("C", 200), ("CSS", 9000)]),
            &commits(&[
                "2023-11-12T10:00:00Z",
                "2023-11-12T10:20:00Z",
                "2023-11-12T19:00:00Z",
                "2023-11-13T10:40:00Z",
            ]),
            &at("2020-01-01T00:00:00Z"),
            &options,
            at("2023-11-14T08:00:00Z"),
        )
        .unwrap();
        assert_eq!(statistics.total_bytes, 11000);
        let names: Vec<&str> = statistics.languages.iter().map(|language| language.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go", "Other"]);
        assert!((statistics.languages[2].percentage - 25.0).abs() < 1e-9);
        assert_eq!(statistics.most_productive_day, Some(Weekday::Sunday));
        assert_eq!(statistics.most_productive_hour_label(), "10:00 - 11:00");
        assert_eq!(statistics.current_streak, 2);
        assert_eq!(statistics.longest_streak, 2);
        assert_eq!(statistics.weekly_distribution[&Weekday::Sunday], 3);
        assert_eq!(statistics.weekly_distribution[&Weekday::Monday], 1);
        assert_eq!(statistics.account_age.to_string(), "3 years 10 months");
    }

    #[test]
    fn invalid_account_age_fails_test() {
        let result = compute_profile_statistics(
            &LanguageBytes::new(),
            &[],
            &at("2030-01-01T00:00:00Z"),
            &StatsOptions::default(),
            at("2023-11-10T12:00:00Z"),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn serialize_test() {
        let statistics = compute_profile_statistics(
            &languages(&[("Rust", 100)]),
            &[],
            &at("2021-11-10T00:00:00Z"),
            &StatsOptions::default(),
            at("2023-11-10T12:00:00Z"),
        )
        .unwrap();
        let json = serde_json::to_value(&statistics).unwrap();
        assert_eq!(json["most_productive_day"], "N/A");
        assert_eq!(json["most_productive_hour"], "N/A");
        assert_eq!(json["account_age"], "2 years");
        assert_eq!(json["weekly_distribution"]["Sunday"], 0);
        assert_eq!(json["languages"][0]["name"], "Rust");
        assert_eq!(json["languages"][0]["percentage"], 100.0);
        assert_eq!(json["computed_at"], "2023-11-10T12:00:00Z");
    }

    #[test]
    fn display_test() {
        let statistics = compute_profile_statistics(
            &languages(&[("Rust", 100)]),
            &commits(&["2023-11-10T23:10:00Z"]),
            &at("2021-11-10T00:00:00Z"),
            &StatsOptions::default(),
            at("2023-11-10T23:30:00Z"),
        )
        .unwrap();
        let text = statistics.to_string();
        assert!(text.contains("\tRust\t100.00%\t100 bytes"));
        assert!(text.contains("most productive day: Friday"));
        assert!(text.contains("most productive hour: 23:00 - 00:00"));
        assert!(text.contains("current streak: 1 days"));
    }
}
