//! Command-line interface for site-videos.
//!
//! Provides commands for listing the catalog, tallying tags, looking up
//! single videos and exporting the catalog for the site build.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{self, tag_counts, unique_tags, VideoCatalog};
use crate::config::{self, BuildMode};
use crate::domain::{Video, VideoKind};

/// site-videos - Talk and interview catalog for the site
#[derive(Parser, Debug)]
#[command(name = "site-videos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hide drafts regardless of configured mode
    #[arg(long, global = true)]
    pub production: bool,

    /// Catalog file to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List videos
    List {
        /// Filter by type
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Only videos with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Maximum number of videos to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Sort newest first instead of catalog order
        #[arg(long)]
        by_date: bool,
    },

    /// List unique tags
    Tags {
        /// Show how many videos carry each tag
        #[arg(short, long)]
        counts: bool,
    },

    /// Show details of a video
    Show {
        /// Video ID (or a prefix of it)
        video_id: String,
    },

    /// Search titles, conferences and tags
    Search {
        /// Search query
        query: String,
    },

    /// Print the visible catalog as JSON or YAML
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Video type for CLI (maps to VideoKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Conference talks
    Talk,

    /// Interviews
    Interview,
}

impl From<KindArg> for VideoKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Talk => VideoKind::Talk,
            KindArg::Interview => VideoKind::Interview,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config();
        }

        let mode = self.build_mode()?;
        let catalog = self.load_catalog().await?;

        match self.command {
            Commands::List {
                kind,
                tag,
                limit,
                by_date,
            } => list_videos(&catalog, mode, kind, tag, limit, by_date).await,
            Commands::Tags { counts } => list_tags(&catalog, mode, counts).await,
            Commands::Show { video_id } => show_video(&catalog, mode, &video_id).await,
            Commands::Search { query } => search_videos(&catalog, mode, &query).await,
            Commands::Export { format } => export_catalog(&catalog, mode, format).await,
            Commands::Config => show_config(),
        }
    }

    fn build_mode(&self) -> Result<BuildMode> {
        if self.production {
            return Ok(BuildMode::Production);
        }
        Ok(config::config()?.mode)
    }

    async fn load_catalog(&self) -> Result<Cow<'static, VideoCatalog>> {
        let path = match &self.catalog {
            Some(path) => Some(path.clone()),
            None => config::catalog_file()?,
        };

        match path {
            Some(path) => Ok(Cow::Owned(VideoCatalog::load(&path).await?)),
            None => Ok(Cow::Borrowed(VideoCatalog::builtin())),
        }
    }
}

fn print_table(videos: &[&Video]) {
    println!("{:<18} {:<10} {:<12} {:<50}", "ID", "TYPE", "DATE", "TITLE");
    println!("{}", "-".repeat(92));

    for video in videos {
        let title_truncated = if video.title.chars().count() > 47 {
            format!("{}...", video.title.chars().take(47).collect::<String>())
        } else {
            video.title.clone()
        };
        let draft = if video.draft { " [draft]" } else { "" };
        println!(
            "{:<18} {:<10} {:<12} {}{}",
            video.id().as_str(),
            video.kind.to_string(),
            video.publish_date,
            title_truncated,
            draft
        );
    }
}

/// Apply `list` filters: kind, then tag, then date order, then limit
fn select_videos<'a>(
    mut videos: Vec<&'a Video>,
    kind: Option<KindArg>,
    tag: Option<&str>,
    limit: Option<usize>,
    by_date: bool,
) -> Vec<&'a Video> {
    if let Some(kind) = kind {
        let kind = VideoKind::from(kind);
        videos.retain(|v| v.kind == kind);
    }
    if let Some(tag) = tag {
        videos.retain(|v| v.has_tag(tag));
    }
    if by_date {
        videos = catalog::sort_by_date(videos);
    }
    if let Some(limit) = limit {
        videos.truncate(limit);
    }
    videos
}

/// List visible videos
async fn list_videos(
    catalog: &VideoCatalog,
    mode: BuildMode,
    kind: Option<KindArg>,
    tag: Option<String>,
    limit: Option<usize>,
    by_date: bool,
) -> Result<()> {
    let visible = catalog.all_videos(mode).await;
    let videos = select_videos(visible, kind, tag.as_deref(), limit, by_date);

    if videos.is_empty() {
        println!("No videos found");
        return Ok(());
    }

    print_table(&videos);
    println!("\nTotal: {} videos ({} mode)", videos.len(), mode);

    Ok(())
}

/// List unique tags, optionally with counts
async fn list_tags(catalog: &VideoCatalog, mode: BuildMode, counts: bool) -> Result<()> {
    let videos = catalog.all_videos(mode).await;

    if counts {
        let counted = tag_counts(videos.iter().copied());
        println!("{:<24} {:>5}", "TAG", "COUNT");
        println!("{}", "-".repeat(30));
        for tc in counted {
            println!("{:<24} {:>5}", tc.tag, tc.count);
        }
    } else {
        for tag in unique_tags(videos.iter().copied()) {
            println!("{}", tag);
        }
    }

    Ok(())
}

/// Visible video matching an ID prefix; drafts are not found in production
async fn find_visible<'a>(
    catalog: &'a VideoCatalog,
    mode: BuildMode,
    video_id: &str,
) -> Result<&'a Video> {
    let visible = catalog.all_videos(mode).await;
    Ok(catalog::find_by_prefix(visible, video_id)?)
}

/// Show details of one video
async fn show_video(catalog: &VideoCatalog, mode: BuildMode, video_id: &str) -> Result<()> {
    let video = find_visible(catalog, mode, video_id).await?;

    println!("ID: {}", video.id());
    println!("Title: {}", video.title);
    println!("Type: {}", video.kind);
    println!("Published: {}", video.publish_date);
    if let Some(conference) = &video.conference {
        println!("Conference: {}", conference);
    }
    if !video.tags.is_empty() {
        println!("Tags: {}", video.tags.join(", "));
    }
    println!("URL: {}", video.url);
    if video.draft {
        println!("Draft: yes");
    }

    Ok(())
}

/// Search matches that are visible in `mode`
async fn visible_matches<'a>(
    catalog: &'a VideoCatalog,
    mode: BuildMode,
    query: &str,
) -> Vec<&'a Video> {
    let visible = catalog.all_videos(mode).await;
    catalog
        .search(query)
        .into_iter()
        .filter(|v| visible.iter().any(|shown| std::ptr::eq(*shown, *v)))
        .collect()
}

/// Search visible videos
async fn search_videos(catalog: &VideoCatalog, mode: BuildMode, query: &str) -> Result<()> {
    let results = visible_matches(catalog, mode, query).await;

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_table(&results);

    Ok(())
}

/// Print the visible catalog
async fn export_catalog(catalog: &VideoCatalog, mode: BuildMode, format: ExportFormat) -> Result<()> {
    let videos = catalog.all_videos(mode).await;

    let output = match format {
        ExportFormat::Json => catalog::to_json(videos)?,
        ExportFormat::Yaml => catalog::to_yaml(videos)?,
    };
    println!("{}", output);

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Mode:        {}", cfg.mode);
    println!(
        "Catalog:     {}",
        cfg.catalog_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!();
    println!("Site:");
    println!("  Title:       {}", cfg.site.title);
    if !cfg.site.author.is_empty() {
        println!("  Author:      {}", cfg.site.author);
    }
    if let Some(url) = &cfg.site.url {
        println!("  URL:         {}", url);
    }
    if !cfg.site.description.is_empty() {
        println!("  Description: {}", cfg.site.description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::domain::VideoId;
    use std::path::Path;
    use tempfile::TempDir;

    const PUBLISHED_URL: &str = "https://example.com/published";
    const DRAFT_URL: &str = "https://example.com/draft";

    fn sample() -> VideoCatalog {
        VideoCatalog::new(vec![
            Video::talk("Old Rust talk", "2015-06-01", "https://example.com/old")
                .with_tags(["rust", "web"]),
            Video::talk("Published talk", "2021-03-01", PUBLISHED_URL).with_tag("rust"),
            Video::interview("Rust interview", "2023-01-01", "https://example.com/interview")
                .with_tag("rust"),
            Video::talk("Draft talk", "2024-01-01", DRAFT_URL)
                .with_tag("rust")
                .as_draft(),
        ])
    }

    fn write_catalog(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("videos.json");
        std::fs::write(&path, catalog::to_json(sample().videos()).unwrap()).unwrap();
        path
    }

    fn cli(path: &Path, args: &[&str]) -> Cli {
        let path = path.to_str().unwrap();
        let mut argv = vec!["site-videos", "--production", "--catalog", path];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn titles<'a>(videos: &[&'a Video]) -> Vec<&'a str> {
        videos.iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn test_select_videos_filters_then_sorts_then_limits() {
        let catalog = sample();
        let all: Vec<&Video> = catalog.videos().iter().collect();

        let talks = select_videos(all.clone(), Some(KindArg::Talk), Some("rust"), None, false);
        assert_eq!(
            titles(&talks),
            vec!["Old Rust talk", "Published talk", "Draft talk"]
        );

        let newest = select_videos(all.clone(), Some(KindArg::Talk), Some("rust"), Some(2), true);
        assert_eq!(titles(&newest), vec!["Draft talk", "Published talk"]);

        let web = select_videos(all, None, Some("web"), Some(5), true);
        assert_eq!(titles(&web), vec!["Old Rust talk"]);
    }

    #[tokio::test]
    async fn test_show_hides_drafts_in_production() {
        let catalog = sample();
        let draft_id = VideoId::from_url(DRAFT_URL);

        let err = find_visible(&catalog, BuildMode::Production, draft_id.as_str())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::NotFound { .. })
        ));

        let video = find_visible(&catalog, BuildMode::Development, draft_id.as_str())
            .await
            .unwrap();
        assert_eq!(video.title, "Draft talk");
    }

    #[tokio::test]
    async fn test_search_only_returns_visible_videos() {
        let catalog = sample();

        let production = visible_matches(&catalog, BuildMode::Production, "talk").await;
        assert_eq!(titles(&production), vec!["Old Rust talk", "Published talk"]);

        let development = visible_matches(&catalog, BuildMode::Development, "talk").await;
        assert_eq!(development.len(), 3);
    }

    #[tokio::test]
    async fn test_production_show_of_draft_fails() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp);
        let draft_id = VideoId::from_url(DRAFT_URL);

        let err = cli(&path, &["show", draft_id.as_str()])
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::NotFound { .. })
        ));

        let published_id = VideoId::from_url(PUBLISHED_URL);
        assert!(cli(&path, &["show", published_id.as_str()])
            .execute()
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_commands_run_against_catalog_file() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp);

        for args in [
            &["list", "--kind", "talk", "--tag", "rust", "--by-date", "--limit", "1"][..],
            &["tags", "--counts"][..],
            &["search", "rust"][..],
            &["export", "--format", "yaml"][..],
        ] {
            assert!(cli(&path, args).execute().await.is_ok(), "{:?}", args);
        }
    }

    #[tokio::test]
    async fn test_catalog_flag_takes_the_given_file() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp);
        let cli = cli(&path, &["list"]);

        assert!(cli.production);
        assert_eq!(cli.build_mode().unwrap(), BuildMode::Production);
        let catalog = cli.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 4);

        let missing = temp.path().join("missing.json");
        assert!(super::Cli::try_parse_from([
            "site-videos",
            "--catalog",
            missing.to_str().unwrap(),
            "list"
        ])
        .unwrap()
        .load_catalog()
        .await
        .is_err());
    }
}
