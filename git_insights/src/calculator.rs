use crate::api::{ActivitySource, Result};
use crate::stats::{compute_profile_statistics, ProfileStatistics, StatsOptions};
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use log::{debug, info};
use serde::Serialize;
use std::fmt::{self, Display};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Constructor)]
pub struct ProfileReport {
    pub username: String,
    #[serde(flatten)]
    pub statistics: ProfileStatistics,
}

impl Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "user: {}", self.username)?;
        write!(f, "{}", self.statistics)
    }
}

pub struct ProfileStatsCalculator<SOURCE>
where
    SOURCE: ActivitySource,
{
    source: Arc<SOURCE>,
    options: Arc<StatsOptions>,
}

impl<SOURCE> ProfileStatsCalculator<SOURCE>
where
    SOURCE: ActivitySource,
{
    pub fn new(source: SOURCE, options: StatsOptions) -> Self {
        ProfileStatsCalculator {
            source: Arc::new(source),
            options: Arc::new(options),
        }
    }

    /// Gathers the activity of the source's user and derives its statistics as of `now`.
    pub async fn calculate(&self, now: DateTime<Utc>) -> Result<ProfileReport> {
        let username = self.source.username().await?;
        info!("Gathering activity of {}", username);

        let (profile, language_bytes, commits) = futures::try_join!(
            self.source.user_profile(),
            self.source.language_bytes(&username),
            self.source.commits(&username),
        )?;
        debug!(
            "Found {} languages and {} commits of {}",
            language_bytes.len(),
            commits.len(),
            profile.login
        );

        let options = self.options.clone();
        let statistics = tokio::task::spawn_blocking(move || {
            compute_profile_statistics(&language_bytes, &commits, &profile.created_at, &options, now)
        })
        .await??;
        info!("Computed statistics of {}", username);

        Ok(ProfileReport::new(username, statistics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Error, UserProfile};
    use crate::model::{CommitEvent, LanguageBytes, Weekday};
    use async_trait::async_trait;

    struct StaticSource {
        login: &'static str,
        created_at: &'static str,
        languages: Vec<(&'static str, u64)>,
        commits: Vec<&'static str>,
    }

    #[async_trait]
    impl ActivitySource for StaticSource {
        async fn username(&self) -> Result<String> {
            Ok(self.login.to_string())
        }

        async fn user_profile(&self) -> Result<UserProfile> {
            let created_at = DateTime::parse_from_rfc3339(self.created_at).unwrap().with_timezone(&Utc);
            Ok(UserProfile::new(self.login.to_string(), created_at))
        }

        async fn language_bytes(&self, _username: &str) -> Result<LanguageBytes> {
            Ok(self
                .languages
                .iter()
                .map(|(name, bytes)| (name.to_string(), *bytes))
                .collect())
        }

        async fn commits(&self, username: &str) -> Result<Vec<CommitEvent>> {
            if username != self.login {
                return Err(Error::Source(format!("unknown user {}", username)));
            }
            Ok(self
                .commits
                .iter()
                .map(|timestamp| CommitEvent::new(DateTime::parse_from_rfc3339(timestamp).unwrap()))
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ActivitySource for FailingSource {
        async fn username(&self) -> Result<String> {
            Ok("octocat".to_string())
        }

        async fn user_profile(&self) -> Result<UserProfile> {
            Err(Error::Source("profile unavailable".to_string()))
        }

        async fn language_bytes(&self, _username: &str) -> Result<LanguageBytes> {
            Ok(LanguageBytes::new())
        }

        async fn commits(&self, _username: &str) -> Result<Vec<CommitEvent>> {
            Ok(Vec::new())
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2023-11-14T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[tokio::test]
    async fn calculate_test() {
        let source = StaticSource {
            login: "octocat",
            created_at: "2020-03-15T08:00:00Z",
            languages: vec![("Rust", 3000), ("Shell", 1000)],
            commits: vec!["2023-11-12T10:00:00Z", "2023-11-13T10:30:00Z", "2023-11-13T18:00:00Z"],
        };
        let calculator = ProfileStatsCalculator::new(source, StatsOptions::default());
        let report = calculator.calculate(now()).await.unwrap();

        assert_eq!(report.username, "octocat");
        assert_eq!(report.statistics.total_bytes, 4000);
        assert_eq!(report.statistics.languages.len(), 2);
        assert_eq!(report.statistics.most_productive_day, Some(Weekday::Monday));
        assert_eq!(report.statistics.most_productive_hour_label(), "10:00 - 11:00");
        assert_eq!(report.statistics.current_streak, 2);
        assert_eq!(report.statistics.longest_streak, 2);
        assert_eq!(report.statistics.account_age.to_string(), "3 years 7 months");
        assert!(report.to_string().starts_with("user: octocat\n"));
    }

    #[tokio::test]
    async fn source_failure_test() {
        let calculator = ProfileStatsCalculator::new(FailingSource, StatsOptions::default());
        let result = calculator.calculate(now()).await;
        assert!(matches!(result, Err(Error::Source(_))));
    }

    #[tokio::test]
    async fn report_serialize_test() {
        let source = StaticSource {
            login: "octocat",
            created_at: "2023-11-01T00:00:00Z",
            languages: vec![],
            commits: vec![],
        };
        let report = ProfileStatsCalculator::new(source, StatsOptions::default())
            .calculate(now())
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["username"], "octocat");
        assert_eq!(json["most_productive_day"], "N/A");
        assert_eq!(json["account_age"], "13 days");
        assert_eq!(json["current_streak"], 0);
    }
}
