//! Tag Aggregation Integration Tests
//!
//! Properties of all_tags / unique_tags / tag_counts over the built-in
//! catalog and hand-built lists.

use std::collections::HashSet;

use site_videos::{all_tags, tag_counts, unique_tags, BuildMode, TagCount, Video, VideoCatalog};

fn video(url: &str, tags: &[&str]) -> Video {
    Video::talk("Talk", "2020-01-01", url).with_tags(tags.iter().copied())
}

#[test]
fn test_mixed_tags_scenario() {
    let videos = vec![
        video("https://example.com/1", &["a", "b"]),
        video("https://example.com/2", &["b"]),
        Video::interview("No tags", "2020-01-03", "https://example.com/3"),
    ];

    assert_eq!(all_tags(&videos), vec!["a", "b", "b"]);
    assert_eq!(unique_tags(&videos), vec!["a", "b"]);
    assert_eq!(
        tag_counts(&videos),
        vec![TagCount::new("b", 2), TagCount::new("a", 1)]
    );
}

#[test]
fn test_all_tags_length_matches_tag_sum() {
    let catalog = VideoCatalog::builtin();
    let expected: usize = catalog.videos().iter().map(|v| v.tags.len()).sum();

    assert_eq!(all_tags(catalog.videos()).len(), expected);
}

#[test]
fn test_unique_tags_cover_all_tags_without_duplicates() {
    let catalog = VideoCatalog::builtin();
    let all = all_tags(catalog.videos());
    let unique = unique_tags(catalog.videos());

    let unique_set: HashSet<&str> = unique.iter().copied().collect();
    assert_eq!(unique_set.len(), unique.len());
    assert!(all.iter().all(|t| unique_set.contains(t)));
    assert!(unique.iter().all(|t| all.contains(t)));
}

#[test]
fn test_tag_counts_sum_and_order() {
    let catalog = VideoCatalog::builtin();
    let counts = tag_counts(catalog.videos());

    let total: usize = counts.iter().map(|c| c.count).sum();
    assert_eq!(total, all_tags(catalog.videos()).len());
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_builtin_tag_counts() {
    let catalog = VideoCatalog::builtin();
    let counts = tag_counts(catalog.videos());

    assert_eq!(counts[0], TagCount::new("firebase", 9));
    assert_eq!(counts[1], TagCount::new("web", 4));
    assert_eq!(counts[2], TagCount::new("ruby", 3));
    assert_eq!(counts[3], TagCount::new("personal", 2));
    // Ties keep first-occurrence order
    assert_eq!(counts[4], TagCount::new("ai", 1));
    assert_eq!(counts[5], TagCount::new("postgresql", 1));
}

#[test]
fn test_builtin_unique_tags_first_occurrence() {
    let catalog = VideoCatalog::builtin();

    assert_eq!(
        unique_tags(catalog.videos()),
        vec![
            "firebase",
            "ai",
            "postgresql",
            "data-connect",
            "genkit",
            "app-hosting",
            "apis",
            "web",
            "performance",
            "serverless",
            "personal",
            "polymer",
            "ruby",
            "rails",
        ]
    );
}

#[tokio::test]
async fn test_tag_functions_accept_filtered_videos() {
    let catalog = VideoCatalog::new(vec![
        video("https://example.com/1", &["rust"]),
        video("https://example.com/2", &["secret"]).as_draft(),
    ]);

    let visible = catalog.all_videos(BuildMode::Production).await;
    assert_eq!(unique_tags(visible.iter().copied()), vec!["rust"]);

    let everything = catalog.all_videos(BuildMode::Development).await;
    assert_eq!(unique_tags(everything), vec!["rust", "secret"]);
}

#[test]
fn test_idempotent() {
    let catalog = VideoCatalog::builtin();

    assert_eq!(all_tags(catalog.videos()), all_tags(catalog.videos()));
    assert_eq!(unique_tags(catalog.videos()), unique_tags(catalog.videos()));
    assert_eq!(tag_counts(catalog.videos()), tag_counts(catalog.videos()));
}
