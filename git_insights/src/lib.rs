//! Developer profile statistics
//!
//! # Overview
//!
//! Turns the public activity of a developer on a code hosting service into a handful of descriptive statistics:
//! which languages the code is written in, on which weekday and at which hour commits usually happen, how long the
//! longest and the still running streaks of daily commits are, and how old the account is.
//!
//! The engine itself ([`compute_profile_statistics`]) is a pure function of already fetched data. Language byte
//! counts are ranked and everything past the visible cutoff is folded into a single `Other` entry, commit instants
//! are bucketed by weekday and hour, truncated to calendar days for the streaks, and the account age is computed
//! with calendar months so that an anniversary only counts once its day of month has been reached.
//!
//! All day and hour buckets are taken in one configurable time zone ([`StatsOptions::time_zone`], UTC by default),
//! so weekdays, hours and streaks never disagree about which day a commit belongs to.
//!
//! With the `api` feature the crate also describes the collaborator delivering the activity ([`ActivitySource`]),
//! and with the `calculator` feature it gathers that activity concurrently and runs the engine
//! ([`ProfileStatsCalculator`]).

pub mod account_age;
pub mod api;
#[cfg(feature = "calculator")]
pub mod calculator;
pub mod frequency;
pub mod histogram;
pub mod languages;
pub mod model;
pub mod stats;
pub mod streaks;
pub mod temporal;

pub use account_age::AccountAge;
#[cfg(feature = "api")]
pub use api::ActivitySource;
pub use api::{Error, Result, UserProfile};
#[cfg(feature = "calculator")]
pub use calculator::{ProfileReport, ProfileStatsCalculator};
pub use histogram::WeeklyDistribution;
pub use languages::{ExcludedLanguages, OTHER_LANGUAGE};
pub use model::{CommitEvent, HourOfDay, LanguageBytes, LanguageEntry, Weekday};
pub use stats::{compute_profile_statistics, ProfileStatistics, StatsOptions, NOT_AVAILABLE};
pub use streaks::Streaks;
pub use temporal::TemporalModes;
