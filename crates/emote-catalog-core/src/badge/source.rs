//! Upstream badge list fetch

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{EmoteCatalogError, Result};

use super::types::Badge;

/// Transport boundary for the one-time badge list fetch
#[async_trait]
pub trait BadgeSource: Send + Sync {
    async fn fetch_badges(&self) -> Result<Vec<Badge>>;
}

/// Reads `<data_dir>/badges.json`
#[derive(Debug, Clone)]
pub struct FileBadgeSource {
    path: PathBuf,
}

impl FileBadgeSource {
    const FILENAME: &'static str = "badges.json";

    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(Self::FILENAME),
        }
    }
}

#[async_trait]
impl BadgeSource for FileBadgeSource {
    async fn fetch_badges(&self) -> Result<Vec<Badge>> {
        let content =
            tokio::fs::read(&self.path)
                .await
                .map_err(|e| EmoteCatalogError::BadgeFetch {
                    message: format!("{}: {}", self.path.display(), e),
                })?;

        serde_json::from_slice(&content).map_err(|e| EmoteCatalogError::BadgeFetch {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

/// Fixed badge list
#[derive(Debug, Clone, Default)]
pub struct StaticBadgeSource {
    badges: Vec<Badge>,
}

impl StaticBadgeSource {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self { badges }
    }
}

#[async_trait]
impl BadgeSource for StaticBadgeSource {
    async fn fetch_badges(&self) -> Result<Vec<Badge>> {
        Ok(self.badges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_source_reads_list() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("badges.json"),
            r#"[{"id":"b0","name":"Dev","users":["1","two"]}]"#,
        )
        .unwrap();

        let badges = FileBadgeSource::new(temp.path()).fetch_badges().await.unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].users, vec!["1", "two"]);
    }

    #[tokio::test]
    async fn file_source_missing_is_badge_fetch_error() {
        let temp = TempDir::new().unwrap();
        let err = FileBadgeSource::new(temp.path())
            .fetch_badges()
            .await
            .unwrap_err();
        assert!(matches!(err, EmoteCatalogError::BadgeFetch { .. }));
    }
}
