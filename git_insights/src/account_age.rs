use crate::api::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use derive_more::Constructor;
use std::fmt::{self, Display};

/// Calendar time elapsed since an account was created.
///
/// Displayed in the coarsest non zero unit, e.g. `"2 years 11 months"`, `"4 months"` or `"12 days"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct AccountAge {
    pub years: u32,
    pub months: u32,
    pub days: u64,
}

impl Display for AccountAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, 0) => write!(f, "{} days", self.days),
            (0, months) => write!(f, "{} months", months),
            (years, 0) => write!(f, "{} years", years),
            (years, months) => write!(f, "{} years {} months", years, months),
        }
    }
}

/// Computes the age of an account created at `created_at` as of `now`.
///
/// A month only counts once its day of month has been reached, so 2020-03-15 to 2023-03-10 is 2 years 11 months.
pub fn account_age(created_at: &DateTime<Utc>, now: &DateTime<Utc>, time_zone: &FixedOffset) -> Result<AccountAge> {
    if created_at > now {
        return Err(Error::Validation(format!(
            "account creation time {} is later than {}",
            created_at.to_rfc3339(),
            now.to_rfc3339()
        )));
    }
    let created = created_at.with_timezone(time_zone);
    let current = now.with_timezone(time_zone);

    let mut years = current.year() - created.year();
    let mut months = current.month() as i32 - created.month() as i32;
    if current.day() < created.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    let days = now.signed_duration_since(*created_at).num_days();

    Ok(AccountAge::new(years.max(0) as u32, months as u32, days.max(0) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(timestamp).unwrap().with_timezone(&Utc)
    }

    fn age(created_at: &str, now: &str) -> String {
        account_age(&at(created_at), &at(now), &FixedOffset::east_opt(0).unwrap())
            .unwrap()
            .to_string()
    }

    #[test]
    fn years_and_months_test() {
        assert_eq!(age("2020-01-01T00:00:00Z", "2023-06-15T00:00:00Z"), "3 years 5 months");
    }

    #[test]
    fn anniversary_not_reached_test() {
        assert_eq!(age("2020-03-15T00:00:00Z", "2023-03-10T00:00:00Z"), "2 years 11 months");
    }

    #[test]
    fn whole_years_test() {
        assert_eq!(age("2019-07-04T00:00:00Z", "2023-07-20T00:00:00Z"), "4 years");
    }

    #[test]
    fn months_only_test() {
        assert_eq!(age("2023-01-10T00:00:00Z", "2023-05-10T00:00:00Z"), "4 months");
    }

    #[test]
    fn days_only_test() {
        assert_eq!(age("2023-02-20T00:00:00Z", "2023-03-10T00:00:00Z"), "18 days");
        assert_eq!(age("2022-12-31T00:00:00Z", "2023-01-01T00:00:00Z"), "1 days");
    }

    #[test]
    fn created_just_now_test() {
        assert_eq!(age("2023-11-10T12:00:00Z", "2023-11-10T12:00:00Z"), "0 days");
    }

    #[test]
    fn created_in_future_test() {
        let result = account_age(
            &at("2024-01-01T00:00:00Z"),
            &at("2023-01-01T00:00:00Z"),
            &FixedOffset::east_opt(0).unwrap(),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
