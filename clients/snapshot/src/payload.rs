use chrono::{DateTime, FixedOffset, Utc};
use git_insights::{CommitEvent, UserProfile};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug)]
pub struct Snapshot {
    pub user: User,
    #[serde(default)]
    pub repositories: Vec<Repo>,
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub login: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile::new(user.login, user.created_at)
    }
}

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub languages: HashMap<String, u64>,
    #[serde(default)]
    pub commits: Vec<RepoCommit>,
}

#[derive(Deserialize, Debug)]
pub struct RepoCommit {
    pub commit: Commit,
}

#[derive(Deserialize, Debug)]
pub struct Commit {
    pub author: Option<CommitAuthor>,
}

#[derive(Deserialize, Debug)]
pub struct CommitAuthor {
    pub date: Option<DateTime<FixedOffset>>,
}

impl RepoCommit {
    /// Authoring time, absent when the provider did not report one.
    pub fn event(&self) -> Option<CommitEvent> {
        self.commit
            .author
            .as_ref()
            .and_then(|author| author.date)
            .map(CommitEvent::from)
    }
}
