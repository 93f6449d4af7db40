use crate::SnapshotClient;
use anyhow::Context;
use git_insights::{Error, Result};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct SnapshotClientBuilder {
    path: Option<PathBuf>,
    include_forks: bool,
}

impl SnapshotClientBuilder {
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> SnapshotClientBuilder {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Forked repositories are left out unless included here.
    pub fn with_forks(mut self, include_forks: bool) -> SnapshotClientBuilder {
        self.include_forks = include_forks;
        self
    }

    pub async fn build(self) -> Result<SnapshotClient> {
        let path = self
            .path
            .ok_or_else(|| Error::Source("snapshot path has not been set".to_string()))?;
        info!("Reading activity snapshot {}", path.display());
        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read activity snapshot {}", path.display()))?;
        SnapshotClient::from_json(&raw, self.include_forks)
    }
}
