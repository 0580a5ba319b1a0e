//! Tag aggregation over a list of videos.
//!
//! None of these functions filter drafts. Pass them the result of
//! [`VideoCatalog::all_videos`](super::VideoCatalog::all_videos) to do so.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::Video;

/// A tag with the number of videos carrying it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCount<'a> {
    pub tag: &'a str,
    pub count: usize,
}

impl<'a> TagCount<'a> {
    pub fn new(tag: &'a str, count: usize) -> Self {
        Self { tag, count }
    }
}

/// All tags in input order, duplicates included
pub fn all_tags<'a, I>(videos: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Video>,
{
    videos
        .into_iter()
        .flat_map(|v| v.tags.iter().map(String::as_str))
        .collect()
}

/// Distinct tags in first-occurrence order
pub fn unique_tags<'a, I>(videos: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Video>,
{
    let mut seen = HashSet::new();
    all_tags(videos)
        .into_iter()
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Distinct tags with their counts, most used first.
///
/// Tags with equal counts keep first-occurrence order.
pub fn tag_counts<'a, I>(videos: I) -> Vec<TagCount<'a>>
where
    I: IntoIterator<Item = &'a Video>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount<'a>> = Vec::new();

    for tag in all_tags(videos) {
        match index.get(tag) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push(TagCount::new(tag, 1));
            }
        }
    }

    // sort_by_key is stable
    counts.sort_by_key(|c| Reverse(c.count));
    counts
}

/// Videos newest first; undated entries go last
pub fn sort_by_date<'a, I>(videos: I) -> Vec<&'a Video>
where
    I: IntoIterator<Item = &'a Video>,
{
    let mut sorted: Vec<&Video> = videos.into_iter().collect();
    sorted.sort_by_key(|v| Reverse(v.published_on()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(tags: &[&str]) -> Video {
        Video::talk("t", "2020-01-01", "https://example.com").with_tags(tags.iter().copied())
    }

    #[test]
    fn test_all_tags_keeps_duplicates_in_order() {
        let videos = vec![video(&["a", "b"]), video(&["b"]), video(&[])];

        assert_eq!(all_tags(&videos), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_unique_tags_first_occurrence_order() {
        let videos = vec![video(&["c", "a"]), video(&["b", "a", "c"])];

        assert_eq!(unique_tags(&videos), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_tag_counts_sorted_descending() {
        let videos = vec![video(&["a", "b"]), video(&["b"]), video(&[])];

        assert_eq!(
            tag_counts(&videos),
            vec![TagCount::new("b", 2), TagCount::new("a", 1)]
        );
    }

    #[test]
    fn test_tag_counts_ties_keep_first_occurrence() {
        let videos = vec![video(&["x", "y"]), video(&["z", "y", "x"]), video(&["w"])];

        assert_eq!(
            tag_counts(&videos),
            vec![
                TagCount::new("x", 2),
                TagCount::new("y", 2),
                TagCount::new("z", 1),
                TagCount::new("w", 1),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let videos: Vec<Video> = Vec::new();

        assert!(all_tags(&videos).is_empty());
        assert!(unique_tags(&videos).is_empty());
        assert!(tag_counts(&videos).is_empty());
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let videos = vec![
            Video::talk("old", "2010-11-17", "https://example.com/1"),
            Video::talk("undated", "someday", "https://example.com/2"),
            Video::talk("new", "2024-05-16", "https://example.com/3"),
        ];

        let titles: Vec<&str> = sort_by_date(&videos)
            .into_iter()
            .map(|v| v.title.as_str())
            .collect();
        assert_eq!(titles, vec!["new", "old", "undated"]);
    }
}
