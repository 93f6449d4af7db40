use chrono::{DateTime, FixedOffset, TimeZone, Timelike};
use derive_more::{Constructor, From};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Display};
use strum_macros::{EnumIter, EnumString};

/// Language name to the number of bytes written in it.
pub type LanguageBytes = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Constructor)]
pub struct LanguageEntry {
    pub name: String,
    pub bytes: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Constructor)]
pub struct CommitEvent {
    pub timestamp: DateTime<FixedOffset>,
}

impl CommitEvent {
    /// Commit instant seen from `time_zone`.
    pub(crate) fn local(&self, time_zone: &FixedOffset) -> DateTime<FixedOffset> {
        self.timestamp.with_timezone(time_zone)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter, EnumString, strum_macros::Display,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// One hour long bucket of the day, displayed as `"HH:00 - HH:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourOfDay(u32);

impl HourOfDay {
    pub fn new(hour: u32) -> Option<Self> {
        (hour < 24).then_some(HourOfDay(hour))
    }

    pub(crate) fn of<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        HourOfDay(timestamp.hour())
    }

    pub fn hour(&self) -> u32 {
        self.0
    }
}

impl Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.0, (self.0 + 1) % 24)
    }
}

/// Tests

#[test]
fn hour_of_day_wraps_at_midnight_test() {
    assert_eq!(HourOfDay::new(23).unwrap().to_string(), "23:00 - 00:00");
    assert_eq!(HourOfDay::new(0).unwrap().to_string(), "00:00 - 01:00");
    assert_eq!(HourOfDay::new(9).unwrap().to_string(), "09:00 - 10:00");
}

#[test]
fn hour_of_day_out_of_range_test() {
    assert_eq!(HourOfDay::new(24), None);
    assert_eq!(HourOfDay::new(23).map(|hour| hour.hour()), Some(23));
}

#[test]
fn weekday_from_chrono_test() {
    assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    assert_eq!(Weekday::from(chrono::Weekday::Mon).to_string(), "Monday");
}

#[test]
fn weekday_from_str_test() {
    assert_eq!("Wednesday".parse::<Weekday>(), Ok(Weekday::Wednesday));
    assert_eq!("Sunday".parse::<Weekday>(), Ok(Weekday::Sunday));
    assert!("Someday".parse::<Weekday>().is_err());
}

#[test]
fn commit_event_local_test() {
    let commit = CommitEvent::new(DateTime::parse_from_rfc3339("2023-11-12T23:30:00+00:00").unwrap());
    let east = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(HourOfDay::of(&commit.local(&east)).hour(), 1);
}
