#[cfg(feature = "api")]
use crate::model::{CommitEvent, LanguageBytes};
#[cfg(feature = "api")]
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Activity source error: {0}")]
    Source(String),
    #[cfg(feature = "calculator")]
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct UserProfile {
    pub login: String,
    pub created_at: DateTime<Utc>,
}

/// Already fetched activity of a single account.
///
/// Implementations own pagination, authentication and retries. The statistics engine only reads what they return.
#[cfg(feature = "api")]
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn username(&self) -> Result<String>;

    async fn user_profile(&self) -> Result<UserProfile>;

    /// Bytes per language summed over every repository of `username`.
    async fn language_bytes(&self, username: &str) -> Result<LanguageBytes>;

    async fn commits(&self, username: &str) -> Result<Vec<CommitEvent>>;
}
