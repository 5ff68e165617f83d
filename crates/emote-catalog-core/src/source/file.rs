//! File-backed source
//!
//! Reads provider payloads from a data directory:
//!
//! ```text
//! <data_dir>/
//! ├── 7tv/
//! │   ├── global.json
//! │   ├── channels/<id>.json        # any platform
//! │   └── youtube/<id>.json         # platform specific, preferred when present
//! ├── ffz/
//! └── bttv/
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::emote::{Emote, EmoteUrl, Provider, Scope};
use crate::error::{EmoteCatalogError, Result};

use super::EmoteSource;

/// Emote record as stored on disk; the provider comes from the directory
#[derive(Debug, Deserialize)]
struct RawEmote {
    id: String,
    name: String,
    #[serde(default)]
    weight: i32,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    urls: Vec<EmoteUrl>,
}

impl RawEmote {
    fn into_emote(self, provider: Provider) -> Emote {
        Emote {
            id: self.id,
            name: self.name,
            weight: self.weight,
            provider,
            owner: self.owner,
            urls: self.urls,
        }
    }
}

/// Source reading one provider's payloads from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    provider: Provider,
    root: PathBuf,
}

impl FileSource {
    pub fn new(data_dir: &Path, provider: Provider) -> Self {
        Self {
            provider,
            root: data_dir.join(provider.as_str()),
        }
    }

    /// Resolve the payload file for `scope`
    async fn payload_path(&self, scope: &Scope) -> Result<PathBuf> {
        match scope {
            Scope::Global => Ok(self.root.join("global.json")),
            Scope::Channel { id, platform } => {
                // Channel ids become file names; keep them inside the provider root
                if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
                    return Err(EmoteCatalogError::source(
                        self.provider,
                        format!("unusable channel id: {}", id),
                    ));
                }

                let file = format!("{}.json", id);
                if let Some(platform) = platform {
                    let specific = self.root.join(platform.id()).join(&file);
                    if tokio::fs::try_exists(&specific).await.unwrap_or(false) {
                        return Ok(specific);
                    }
                }
                Ok(self.root.join("channels").join(file))
            }
        }
    }
}

#[async_trait]
impl EmoteSource for FileSource {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn fetch(&self, scope: &Scope) -> Result<Vec<Emote>> {
        let path = self.payload_path(scope).await?;
        let content = tokio::fs::read(&path).await?;
        let raw: Vec<RawEmote> = serde_json::from_slice(&content)?;

        Ok(raw
            .into_iter()
            .map(|r| r.into_emote(self.provider))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn reads_global_and_stamps_provider() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("ffz/global.json"),
            r#"[{"id":"1","name":"LUL","weight":3}]"#,
        );

        let source = FileSource::new(temp.path(), Provider::FrankerFaceZ);
        let emotes = source.fetch(&Scope::Global).await.unwrap();
        assert_eq!(emotes.len(), 1);
        assert_eq!(emotes[0].name, "LUL");
        assert_eq!(emotes[0].weight, 3);
        assert_eq!(emotes[0].provider, Provider::FrankerFaceZ);
    }

    #[tokio::test]
    async fn prefers_platform_specific_payload() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("bttv/channels/abc.json"),
            r#"[{"id":"1","name":"generic"}]"#,
        );
        write(
            &temp.path().join("bttv/youtube/abc.json"),
            r#"[{"id":"2","name":"yt"}]"#,
        );

        let source = FileSource::new(temp.path(), Provider::Bttv);

        let yt = source
            .fetch(&Scope::channel("abc", Some(Platform::YouTube)))
            .await
            .unwrap();
        assert_eq!(yt[0].name, "yt");

        // no twitch-specific file, falls back to channels/
        let twitch = source
            .fetch(&Scope::channel("abc", Some(Platform::Twitch)))
            .await
            .unwrap();
        assert_eq!(twitch[0].name, "generic");
    }

    #[tokio::test]
    async fn missing_payload_is_error() {
        let temp = TempDir::new().unwrap();
        let source = FileSource::new(temp.path(), Provider::SevenTv);
        assert!(source.fetch(&Scope::channel("nope", None)).await.is_err());
    }

    #[tokio::test]
    async fn malformed_payload_is_error() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("7tv/global.json"), "{not json");
        let source = FileSource::new(temp.path(), Provider::SevenTv);
        assert!(matches!(
            source.fetch(&Scope::Global).await,
            Err(EmoteCatalogError::Json(_))
        ));
    }

    #[tokio::test]
    async fn rejects_path_like_channel_ids() {
        let temp = TempDir::new().unwrap();
        let source = FileSource::new(temp.path(), Provider::SevenTv);
        for id in ["../global", "a/b", ".hidden"] {
            assert!(matches!(
                source.fetch(&Scope::channel(id, None)).await,
                Err(EmoteCatalogError::Source { .. })
            ));
        }
    }
}
