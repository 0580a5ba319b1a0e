//! Domain types for the video catalog.

pub mod video;

pub use video::{Video, VideoId, VideoKind};
