//! Profile provider backed by a JSON file in the Graph `user` shape.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::graph::parse_user;
use super::{ProfileError, ProfileProvider, UserProfile};

/// Reads a saved profile instead of calling the directory.
#[derive(Debug, Clone)]
pub struct FileProfileProvider {
    path: PathBuf,
}

impl FileProfileProvider {
    /// Create a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileProvider for FileProfileProvider {
    async fn fetch_profile(&self) -> Result<UserProfile, ProfileError> {
        let contents = tokio::fs::read(&self.path).await?;
        let profile = parse_user(&contents)?;
        info!(path = %self.path.display(), "profile loaded from file");
        Ok(profile)
    }

    fn name(&self) -> &str {
        "file"
    }
}
