//! Activity source backed by a JSON export of a user's repositories.
//!
//! The snapshot keeps the shapes the hosting provider's API returns: a `user` object and a list of `repositories`,
//! each with its language byte counts and its commits.

mod builder;
mod payload;

use anyhow::Context;
use async_trait::async_trait;
use git_insights::{ActivitySource, CommitEvent, Error, LanguageBytes, Result, UserProfile};
use log::debug;
use payload::{Repo, Snapshot};

pub use builder::SnapshotClientBuilder;

pub struct SnapshotClient {
    profile: UserProfile,
    repositories: Vec<Repo>,
}

impl SnapshotClient {
    pub fn from_json(raw: &str, include_forks: bool) -> Result<SnapshotClient> {
        let snapshot: Snapshot = serde_json::from_str(raw).context("Failed to decode activity snapshot")?;
        if snapshot.user.login.trim().is_empty() {
            return Err(Error::Source("snapshot user has no login".to_string()));
        }
        let found = snapshot.repositories.len();
        let repositories: Vec<Repo> = snapshot
            .repositories
            .into_iter()
            .filter(|repo| include_forks || !repo.fork)
            .collect();
        debug!(
            "Kept {} of {} repositories{}",
            repositories.len(),
            found,
            if include_forks { "" } else { " (excluding forks)" }
        );
        Ok(SnapshotClient {
            profile: snapshot.user.into(),
            repositories,
        })
    }

    fn check_user(&self, username: &str) -> Result<()> {
        if username == self.profile.login {
            Ok(())
        } else {
            Err(Error::Source(format!(
                "snapshot holds the activity of {}, not {}",
                self.profile.login, username
            )))
        }
    }
}

#[async_trait]
impl ActivitySource for SnapshotClient {
    async fn username(&self) -> Result<String> {
        Ok(self.profile.login.clone())
    }

    async fn user_profile(&self) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }

    async fn language_bytes(&self, username: &str) -> Result<LanguageBytes> {
        self.check_user(username)?;
        let mut language_bytes = LanguageBytes::new();
        for repo in &self.repositories {
            for (language, bytes) in &repo.languages {
                let total = language_bytes.entry(language.clone()).or_insert(0);
                *total = total.checked_add(*bytes).ok_or_else(|| {
                    Error::Validation(format!("byte count of {} does not fit in 64 bits", language))
                })?;
            }
        }
        Ok(language_bytes)
    }

    async fn commits(&self, username: &str) -> Result<Vec<CommitEvent>> {
        self.check_user(username)?;
        let mut commits = Vec::new();
        for repo in &self.repositories {
            let before = commits.len();
            commits.extend(repo.commits.iter().filter_map(|commit| commit.event()));
            let skipped = repo.commits.len() - (commits.len() - before);
            if skipped > 0 {
                debug!("Skipped {} commits of {} without an author date", skipped, repo.name);
            }
        }
        Ok(commits)
    }
}
