//! Catalog of talks and interviews shown on the site.
//!
//! The catalog is an ordered, read-only list of [`Video`] records. The
//! built-in list is compiled into the crate; an alternative list can be
//! loaded from a JSON or YAML file:
//!
//! ```text
//! version: 1
//! videos:
//!   - title: The Grapes of Rapid
//!     type: talk
//!     publishDate: "2010-11-17"
//!     conference: RubyConf '10
//!     tags: [ruby]
//!     url: https://www.youtube.com/watch?v=C7beg3OzxC4
//! ```
//!
//! A bare list of videos (without the `version`/`videos` wrapper) is
//! accepted too.

mod builtin;
pub mod tags;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

use crate::config::BuildMode;
use crate::domain::{Video, VideoId, VideoKind};

pub use tags::{all_tags, sort_by_date, tag_counts, unique_tags, TagCount};

/// Current catalog document version
pub const CATALOG_VERSION: u32 = 1;

static BUILTIN: OnceLock<VideoCatalog> = OnceLock::new();

/// Errors for catalog contents that cannot be served
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Video #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Video '{title}' has an empty URL")]
    EmptyUrl { title: String },

    #[error("Duplicate video URL: {url}")]
    DuplicateUrl { url: String },

    #[error("Unsupported catalog format: {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Unsupported catalog version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Catalog must be a list of videos or a document with a `videos` list")]
    UnexpectedLayout,

    #[error("No video matches ID prefix '{prefix}'")]
    NotFound { prefix: String },

    #[error("ID prefix '{prefix}' matches {matches} videos")]
    AmbiguousPrefix { prefix: String, matches: usize },
}

/// Serialized form used for export
#[derive(Debug, Serialize)]
struct CatalogDocument<'a> {
    version: u32,
    videos: Vec<&'a Video>,
}

/// Ordered, immutable list of videos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCatalog {
    videos: Vec<Video>,
}

impl VideoCatalog {
    /// Create a catalog from an ordered list of videos
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// The catalog compiled into the crate (built once per process)
    pub fn builtin() -> &'static VideoCatalog {
        BUILTIN.get_or_init(|| Self::new(builtin::videos()))
    }

    /// Load and validate a catalog file (`.json`, `.yaml` or `.yml`)
    pub async fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let videos = match format {
            Format::Json => parse_json(&content)
                .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?,
            Format::Yaml => parse_yaml(&content)
                .with_context(|| format!("Failed to parse catalog YAML: {}", path.display()))?,
        };

        let catalog = Self::new(videos);
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        info!(path = %path.display(), videos = catalog.len(), "Loaded video catalog");
        Ok(catalog)
    }

    /// Check that every entry has a title and a unique URL
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut urls = HashSet::new();

        for (index, video) in self.videos.iter().enumerate() {
            if video.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if video.url.trim().is_empty() {
                return Err(CatalogError::EmptyUrl {
                    title: video.title.clone(),
                });
            }
            if !urls.insert(video.url.as_str()) {
                return Err(CatalogError::DuplicateUrl {
                    url: video.url.clone(),
                });
            }
        }

        debug!(videos = self.videos.len(), "Catalog validated");
        Ok(())
    }

    /// Videos visible in `mode`: drafts are dropped in production.
    ///
    /// Resolves immediately; it is async so callers can await it next to
    /// other content sources.
    pub async fn all_videos(&self, mode: BuildMode) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| !(mode.is_production() && v.draft))
            .collect()
    }

    /// Every entry, drafts included
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Get a video by ID
    pub fn get(&self, id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| &v.id() == id)
    }

    /// The single video whose ID starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Video, CatalogError> {
        find_by_prefix(&self.videos, prefix)
    }

    /// Filter videos by kind
    pub fn filter_by_kind(&self, kind: VideoKind) -> Vec<&Video> {
        self.videos.iter().filter(|v| v.kind == kind).collect()
    }

    /// Videos carrying `tag` (exact match)
    pub fn with_tag(&self, tag: &str) -> Vec<&Video> {
        self.videos.iter().filter(|v| v.has_tag(tag)).collect()
    }

    /// Search by query (case-insensitive substring match)
    pub fn search(&self, query: &str) -> Vec<&Video> {
        let query_lower = query.to_lowercase();

        self.videos
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&query_lower)
                    || v
                        .conference
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&query_lower))
                    || v.tags.iter().any(|t| t.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    /// Get the number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// The single video in `videos` whose ID starts with `prefix`.
///
/// An empty prefix matches nothing.
pub fn find_by_prefix<'a>(
    videos: impl IntoIterator<Item = &'a Video>,
    prefix: &str,
) -> Result<&'a Video, CatalogError> {
    let needle = prefix.trim().to_lowercase();
    let not_found = || CatalogError::NotFound {
        prefix: prefix.to_string(),
    };
    if needle.is_empty() {
        return Err(not_found());
    }

    let matches: Vec<&Video> = videos
        .into_iter()
        .filter(|v| v.id().as_str().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(not_found()),
        [video] => Ok(*video),
        _ => Err(CatalogError::AmbiguousPrefix {
            prefix: prefix.to_string(),
            matches: matches.len(),
        }),
    }
}

/// Serialize `videos` as a catalog JSON document
pub fn to_json<'a>(videos: impl IntoIterator<Item = &'a Video>) -> Result<String> {
    let doc = CatalogDocument {
        version: CATALOG_VERSION,
        videos: videos.into_iter().collect(),
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize catalog JSON")
}

/// Serialize `videos` as a catalog YAML document
pub fn to_yaml<'a>(videos: impl IntoIterator<Item = &'a Video>) -> Result<String> {
    let doc = CatalogDocument {
        version: CATALOG_VERSION,
        videos: videos.into_iter().collect(),
    };
    serde_yaml::to_string(&doc).context("Failed to serialize catalog YAML")
}

fn check_version(version: Option<u32>) -> Result<(), CatalogError> {
    match version {
        Some(found) if found > CATALOG_VERSION => Err(CatalogError::UnsupportedVersion {
            found,
            supported: CATALOG_VERSION,
        }),
        _ => Ok(()),
    }
}

/// Parse a JSON catalog: a bare list or `{ version, videos }`
fn parse_json(content: &str) -> Result<Vec<Video>> {
    use serde_json::Value;

    let items = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items,
        Value::Object(mut doc) => {
            let version = doc
                .remove("version")
                .map(serde_json::from_value::<u32>)
                .transpose()
                .context("Invalid catalog version")?;
            check_version(version)?;

            match doc.remove("videos") {
                Some(Value::Array(items)) => items,
                _ => return Err(CatalogError::UnexpectedLayout.into()),
            }
        }
        _ => return Err(CatalogError::UnexpectedLayout.into()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).with_context(|| format!("Invalid video #{}", index))
        })
        .collect()
}

/// Parse a YAML catalog: a bare list or `{ version, videos }`
fn parse_yaml(content: &str) -> Result<Vec<Video>> {
    use serde_yaml::Value;

    let items = match serde_yaml::from_str::<Value>(content)? {
        Value::Sequence(items) => items,
        Value::Mapping(mut doc) => {
            let version = doc
                .remove("version")
                .map(serde_yaml::from_value::<u32>)
                .transpose()
                .context("Invalid catalog version")?;
            check_version(version)?;

            match doc.remove("videos") {
                Some(Value::Sequence(items)) => items,
                _ => return Err(CatalogError::UnexpectedLayout.into()),
            }
        }
        _ => return Err(CatalogError::UnexpectedLayout.into()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_yaml::from_value(item).with_context(|| format!("Invalid video #{}", index))
        })
        .collect()
}

enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
