use chrono::{DateTime, FixedOffset, Offset, Utc};
use clap::Parser;
use git_insights::ExcludedLanguages;
use std::{fmt::Display, path::PathBuf, str::FromStr};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Exported activity snapshot (JSON)
    #[clap(short, long, env)]
    pub snapshot: PathBuf,

    /// Number of languages listed before the rest is folded into "Other"
    #[clap(short, long, env, default_value_t = 5, parse(try_from_str=max_visible_languages_in_range))]
    pub max_visible_languages: usize,

    /// Comma separated languages left out of the breakdown (case-insensitive)
    #[clap(short, long, env, parse(try_from_str=excluded_languages))]
    pub exclude_languages: Option<ExcludedLanguages>,

    /// Count forked repositories too
    #[clap(long, env)]
    pub include_forks: bool,

    /// Time zone of day and hour buckets: "UTC", "Z" or an offset like "+02:00"
    #[clap(short, long, env, default_value = "UTC", parse(try_from_str=parse_time_zone))]
    pub time_zone: FixedOffset,

    /// Reference time (RFC 3339) used instead of the current time
    #[clap(long, env, parse(try_from_str=reference_time))]
    pub now: Option<DateTime<FixedOffset>>,

    /// Print JSON instead of text
    #[clap(long)]
    pub json: bool,
}

fn max_visible_languages_in_range(value: &str) -> clap::Result<usize, String> {
    number_in_range(value, 0, 100, "max_visible_languages".to_string())
}

fn excluded_languages(value: &str) -> clap::Result<ExcludedLanguages, String> {
    value.parse::<ExcludedLanguages>().map_err(|err| format!("{}", err))
}

fn parse_time_zone(value: &str) -> clap::Result<FixedOffset, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("utc") || value == "Z" {
        return Ok(Utc.fix());
    }
    let (sign, offset) = if let Some(offset) = value.strip_prefix('+') {
        (1, offset)
    } else if let Some(offset) = value.strip_prefix('-') {
        (-1, offset)
    } else {
        return Err(format!("{} is not UTC or an offset like +02:00.", value));
    };
    let (hours, minutes) = offset
        .split_once(':')
        .ok_or_else(|| format!("{} is not an offset like +02:00.", value))?;
    let hours: i32 = number_in_range(hours, 0, 23, "time zone hours".to_string())?;
    let minutes: i32 = number_in_range(minutes, 0, 59, "time zone minutes".to_string())?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("{} is not a valid offset.", value))
}

fn reference_time(value: &str) -> clap::Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|err| format!("{} is not an RFC 3339 time: {}", value, err))
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}

/// Tests

#[test]
fn parse_time_zone_test() {
    assert_eq!(parse_time_zone("UTC"), Ok(Utc.fix()));
    assert_eq!(parse_time_zone("Z"), Ok(Utc.fix()));
    assert_eq!(parse_time_zone("+02:00"), Ok(FixedOffset::east_opt(7200).unwrap()));
    assert_eq!(parse_time_zone("-05:30"), Ok(FixedOffset::west_opt(5 * 3600 + 1800).unwrap()));
    assert!(parse_time_zone("02:00").is_err());
    assert!(parse_time_zone("+25:00").is_err());
    assert!(parse_time_zone("+02").is_err());
    assert!(parse_time_zone("").is_err());
}

#[test]
fn max_visible_languages_test() {
    assert_eq!(max_visible_languages_in_range("0"), Ok(0));
    assert_eq!(max_visible_languages_in_range("8"), Ok(8));
    assert!(max_visible_languages_in_range("101").is_err());
    assert!(max_visible_languages_in_range("-1").is_err());
}

#[test]
fn excluded_languages_test() {
    let excluded = excluded_languages("HTML,scss").unwrap();
    assert!(excluded.contains("html"));
    assert!(excluded.contains("SCSS"));
}

#[test]
fn parse_args_test() {
    let args = Args::try_parse_from([
        "git_insights",
        "--snapshot",
        "activity.json",
        "-m",
        "3",
        "-e",
        "HTML",
        "--time-zone",
        "+01:00",
        "--now",
        "2023-11-14T12:00:00Z",
        "--json",
    ])
    .unwrap();
    assert_eq!(args.snapshot, PathBuf::from("activity.json"));
    assert_eq!(args.max_visible_languages, 3);
    assert!(args.exclude_languages.unwrap().contains("html"));
    assert_eq!(args.time_zone, FixedOffset::east_opt(3600).unwrap());
    assert!(args.now.is_some());
    assert!(args.json);
    assert!(!args.include_forks);
}

#[test]
fn default_time_zone_test() {
    let args = Args::try_parse_from(["git_insights", "--snapshot", "activity.json"]).unwrap();
    assert_eq!(args.time_zone, Utc.fix());
    assert_eq!(args.max_visible_languages, 5);
    assert!(args.exclude_languages.is_none());
    assert!(args.now.is_none());
}
