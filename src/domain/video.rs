//! Video records for the catalog.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Video identifier (SHA256(url)[0:16])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    /// Create a video ID from a URL
    pub fn from_url(url: &str) -> Self {
        let digest = Sha256::digest(url.as_bytes());
        Self(hex::encode(&digest[..8]))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    /// Conference or meetup talk
    Talk,

    /// Interview
    Interview,
}

impl std::fmt::Display for VideoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoKind::Talk => write!(f, "talk"),
            VideoKind::Interview => write!(f, "interview"),
        }
    }
}

impl std::str::FromStr for VideoKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "talk" | "talks" => Ok(VideoKind::Talk),
            "interview" | "interviews" => Ok(VideoKind::Interview),
            _ => anyhow::bail!("Unknown video type: {}", s),
        }
    }
}

/// A single talk or interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Human-readable title
    pub title: String,

    /// Talk or interview
    #[serde(rename = "type")]
    pub kind: VideoKind,

    /// Publish date as written (`YYYY-MM-DD`), not validated
    pub publish_date: String,

    /// Conference the talk was given at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,

    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// External video link
    pub url: String,

    /// Hidden in production builds
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

impl Video {
    /// Create a new video
    pub fn new(
        kind: VideoKind,
        title: impl Into<String>,
        publish_date: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            publish_date: publish_date.into(),
            conference: None,
            tags: Vec::new(),
            url: url.into(),
            draft: false,
        }
    }

    /// Create a new talk
    pub fn talk(
        title: impl Into<String>,
        publish_date: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(VideoKind::Talk, title, publish_date, url)
    }

    /// Create a new interview
    pub fn interview(
        title: impl Into<String>,
        publish_date: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(VideoKind::Interview, title, publish_date, url)
    }

    /// Set the conference
    pub fn at(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Mark as draft
    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Identifier derived from the URL
    pub fn id(&self) -> VideoId {
        VideoId::from_url(&self.url)
    }

    /// Parsed publish date, `None` if it is not `YYYY-MM-DD`
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.publish_date, "%Y-%m-%d").ok()
    }

    /// Whether the video carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
