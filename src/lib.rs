//! site-videos - Talk and interview catalog for a personal website
//!
//! Holds the list of talks and interviews shown on the site, filters out
//! drafts for production builds and aggregates tags for tag pages.
//!
//! # Modules
//!
//! - `catalog`: The video list, draft filtering, tag aggregation
//! - `domain`: Data structures (Video, VideoKind, VideoId)
//! - `config`: Build mode and site configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List talks visible in production
//! site-videos --production list --kind talk
//!
//! # Tag counts for the tag index page
//! site-videos tags --counts
//!
//! # Export the catalog for the site build
//! site-videos export --format yaml
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;

// Re-export main types at crate root for convenience
pub use catalog::{all_tags, tag_counts, unique_tags, CatalogError, TagCount, VideoCatalog};
pub use config::{BuildMode, SiteConfig};
pub use domain::{Video, VideoId, VideoKind};
