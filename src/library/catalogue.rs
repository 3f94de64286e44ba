use super::LEGAL_EXTENSION;
use crate::{domain::Episode, expand_tilde, local_path};
use anyhow::{anyhow, Context, Result};
use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Every episode the user can pick from, in listing order.
#[derive(Default)]
pub struct Catalogue {
    pub episodes: Vec<Arc<Episode>>,
    pub source: Option<PathBuf>,
}

#[derive(Deserialize)]
struct CatalogueFile {
    #[serde(default, rename = "episode")]
    episodes: Vec<Episode>,
}

impl Catalogue {
    /// Load from an episodes TOML file, or scan a directory of audio files.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_tilde(path.as_ref())?;

        let episodes = match path.is_dir() {
            true => Self::scan_dir(&path),
            false => {
                let file_str = std::fs::read_to_string(&path)
                    .with_context(|| format!("Could not read episodes at {}", path.display()))?;
                Self::parse_toml(&file_str, path.parent())
                    .with_context(|| format!("Invalid episode list at {}", path.display()))?
            }
        };

        info!(count = episodes.len(), source = %path.display(), "catalogue loaded");

        Ok(Catalogue {
            episodes: episodes.into_iter().map(Arc::new).collect(),
            source: Some(path),
        })
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Arc<Episode>> {
        self.episodes.get(idx)
    }

    /// File or folder name the episodes came from, for the pane title.
    pub fn source_name(&self) -> Option<String> {
        let source = self.source.as_ref()?;
        source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Parse `[[episode]]` tables. Relative local urls resolve against `base`.
    pub fn parse_toml(s: &str, base: Option<&Path>) -> Result<Vec<Episode>> {
        let file = toml::from_str::<CatalogueFile>(s)?;

        file.episodes
            .into_iter()
            .map(|mut episode| {
                if episode.url.trim().is_empty() {
                    return Err(anyhow!("Episode \"{}\" has no url", episode.title));
                }

                if let (Some(base), Some(path)) = (base, local_path(&episode.url)) {
                    if path.is_relative() {
                        episode.url = base.join(path).to_string_lossy().to_string();
                    }
                }

                if episode.duration == 0 {
                    if let Some(duration) = local_path(&episode.url).and_then(|p| read_duration(&p))
                    {
                        episode.duration = duration;
                    }
                }

                Ok(episode)
            })
            .collect()
    }

    /// Collect audio files with vetted extensions. Folders holding a
    /// `.nomedia` file are skipped.
    fn scan_dir(dir: &Path) -> Vec<Episode> {
        let mut files = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| !e.path().join(".nomedia").exists())
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| LEGAL_EXTENSION.contains(ext.to_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .collect::<Vec<_>>();

        files.sort();
        files.iter().map(|path| episode_from_file(path)).collect()
    }
}

fn episode_from_file(path: &Path) -> Episode {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let url = path.to_string_lossy().to_string();

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            warn!(path = %path.display(), "could not read tags: {e}");
            return Episode::new(stem, "Unknown", 0, url);
        }
    };

    let duration = tagged.properties().duration().as_secs();
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    let title = tag
        .and_then(|t| t.title().map(|s| s.to_string()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(stem);
    let members = tag
        .and_then(|t| t.artist().map(|s| s.to_string()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| String::from("Unknown"));

    Episode::new(title, members, duration, url)
}

fn read_duration(path: &Path) -> Option<u64> {
    if !path.is_file() {
        return None;
    }
    lofty::read_from_path(path)
        .map(|tagged| tagged.properties().duration().as_secs())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPISODES: &str = r#"
        [[episode]]
        title = "A Vida é Boa"
        members = "Diego e Richard"
        thumbnail = "https://example.com/a.jpg"
        duration = 3981
        url = "https://example.com/a.m4a"

        [[episode]]
        title = "Local"
        url = "audio/local.mp3"
        duration = 60
    "#;

    #[test]
    fn parses_episode_tables() {
        let episodes = Catalogue::parse_toml(EPISODES, None).unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "A Vida é Boa");
        assert_eq!(episodes[0].members, "Diego e Richard");
        assert_eq!(episodes[0].duration, 3981);
        assert_eq!(episodes[1].members, "");
        assert_eq!(episodes[1].url, "audio/local.mp3");
    }

    #[test]
    fn relative_urls_resolve_against_the_file() {
        let episodes = Catalogue::parse_toml(EPISODES, Some(Path::new("/srv/pods"))).unwrap();

        assert_eq!(episodes[0].url, "https://example.com/a.m4a");
        assert_eq!(
            PathBuf::from(&episodes[1].url),
            PathBuf::from("/srv/pods/audio/local.mp3")
        );
    }

    #[test]
    fn missing_url_is_rejected() {
        let bad = "[[episode]]\ntitle = \"x\"\nurl = \"\"\n";
        assert!(Catalogue::parse_toml(bad, None).is_err());
    }

    #[test]
    fn load_reads_toml_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.toml");
        std::fs::write(&path, EPISODES).unwrap();

        let catalogue = Catalogue::load(&path).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.source.as_deref(), Some(path.as_path()));
        assert_eq!(catalogue.source_name().as_deref(), Some("episodes.toml"));
        assert_eq!(Catalogue::default().source_name(), None);
        assert!(catalogue.get(2).is_none());
    }

    #[test]
    fn scan_skips_foreign_files_and_nomedia_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        std::fs::write(dir.path().join("b-episode.mp3"), b"not really audio").unwrap();

        let hidden = dir.path().join("hidden");
        std::fs::create_dir(&hidden).unwrap();
        std::fs::write(hidden.join(".nomedia"), "").unwrap();
        std::fs::write(hidden.join("secret.mp3"), b"").unwrap();

        let catalogue = Catalogue::load(dir.path()).unwrap();

        assert_eq!(catalogue.len(), 1);
        let episode = &catalogue.episodes[0];
        assert_eq!(episode.title, "b-episode");
        assert_eq!(episode.members, "Unknown");
        assert_eq!(episode.duration, 0);
    }
}
