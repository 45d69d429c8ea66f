pub mod api;
pub mod components;

use crate::models::VideoRecord;
use std::cmp::Ordering;

/// Items revealed on first render and per "Load More" click.
pub const PAGE_SIZE: usize = 12;

/// Most viewed first. Stable, so equal counts keep their file order.
pub fn sort_by_views(videos: &mut [VideoRecord]) {
    videos.sort_by(|a, b| b.views.partial_cmp(&a.views).unwrap_or(Ordering::Equal));
}

/// What the gallery shows for a given number of revealed items.
#[derive(Debug, PartialEq)]
pub struct GalleryView<'a> {
    pub featured: Option<&'a VideoRecord>,
    pub grid: &'a [VideoRecord],
    pub has_more: bool,
}

/// `visible_count` includes the featured item, so the grid holds
/// indices `1..visible_count` of the sorted list.
pub fn gallery_view(videos: &[VideoRecord], visible_count: usize) -> GalleryView<'_> {
    let end = visible_count.min(videos.len());
    GalleryView {
        featured: videos.first(),
        grid: videos.get(1..end).unwrap_or(&[]),
        has_more: visible_count < videos.len(),
    }
}

pub fn next_visible_count(visible_count: usize) -> usize {
    visible_count + PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(video_id: &str, views: f64) -> VideoRecord {
        VideoRecord {
            channel_name: "Channel".to_string(),
            video_id: video_id.to_string(),
            title: format!("Title {video_id}"),
            description: String::new(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            thumbnail: String::new(),
            views,
        }
    }

    fn ids(videos: &[VideoRecord]) -> Vec<&str> {
        videos.iter().map(|v| v.video_id.as_str()).collect()
    }

    fn many(count: usize) -> Vec<VideoRecord> {
        (0..count).map(|i| video(&format!("v{i}"), 0.0)).collect()
    }

    #[test]
    fn sorts_descending_by_views() {
        let mut videos = vec![video("a", 10.0), video("b", 300.0), video("c", 25.0)];
        sort_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut videos = vec![
            video("a", 5.0),
            video("b", 9.0),
            video("c", 5.0),
            video("d", 0.0),
            video("e", 5.0),
        ];
        sort_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["b", "a", "c", "e", "d"]);
    }

    #[test]
    fn fractional_views_are_compared_exactly() {
        let mut videos = vec![video("low", 7.2), video("high", 7.9), video("mid", 7.5)];
        sort_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["high", "mid", "low"]);
    }

    #[test]
    fn unparsed_views_sort_as_zero() {
        let mut videos: Vec<VideoRecord> = serde_json::from_str(
            r#"[
                { "videoId": "missing" },
                { "videoId": "text", "views": "n/a" },
                { "videoId": "some", "views": "3" },
                { "videoId": "zero", "views": 0 }
            ]"#,
        )
        .unwrap();

        sort_by_views(&mut videos);

        assert_eq!(ids(&videos), vec!["some", "missing", "text", "zero"]);
    }

    #[test]
    fn first_item_is_featured_and_grid_fills_first_page() {
        let videos = many(30);
        let view = gallery_view(&videos, PAGE_SIZE);

        assert_eq!(view.featured.map(|v| v.video_id.as_str()), Some("v0"));
        assert_eq!(view.grid.len(), PAGE_SIZE - 1);
        assert_eq!(view.grid[0].video_id, "v1");
        assert!(view.has_more);
    }

    #[test]
    fn load_more_reveals_next_page() {
        let videos = many(30);
        let view = gallery_view(&videos, next_visible_count(PAGE_SIZE));

        assert_eq!(view.grid.len(), 2 * PAGE_SIZE - 1);
        assert!(view.has_more);

        let view = gallery_view(&videos, next_visible_count(2 * PAGE_SIZE));
        assert_eq!(view.grid.len(), 29);
        assert!(!view.has_more);
    }

    #[test]
    fn exact_page_has_no_more() {
        let videos = many(PAGE_SIZE);
        let view = gallery_view(&videos, PAGE_SIZE);

        assert_eq!(view.grid.len(), PAGE_SIZE - 1);
        assert!(!view.has_more);
    }

    #[test]
    fn small_and_empty_lists() {
        let one = many(1);
        let view = gallery_view(&one, PAGE_SIZE);
        assert!(view.featured.is_some());
        assert!(view.grid.is_empty());
        assert!(!view.has_more);

        let view = gallery_view(&[], PAGE_SIZE);
        assert_eq!(
            view,
            GalleryView {
                featured: None,
                grid: &[],
                has_more: false,
            }
        );
    }
}
