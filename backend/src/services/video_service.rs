use crate::models::VideoRecord;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Write the gallery artifact, replacing whatever was there before.
pub fn write_videos(path: &Path, videos: &[VideoRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
            info!("Created output directory {}", parent.display());
        }
    }

    let json = serde_json::to_string_pretty(videos)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(video_id: &str, views: u64) -> VideoRecord {
        VideoRecord {
            channel_name: "Huberman Lab".to_string(),
            video_id: video_id.to_string(),
            title: format!("Episode {video_id}"),
            description: "Line one\nLine \"two\" ünïcode".to_string(),
            published_at: "2024-03-04T05:06:07Z".to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"),
            views,
        }
    }

    fn read_videos(path: &Path) -> Vec<VideoRecord> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn written_records_read_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.json");
        let videos = vec![record("a", 0), record("b", 42), record("c", u64::from(u32::MAX))];

        write_videos(&path, &videos).unwrap();

        assert_eq!(read_videos(&path), videos);
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frontend").join("public").join("videos.json");

        write_videos(&path, &[record("a", 1)]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.json");

        write_videos(&path, &[record("a", 1), record("b", 2)]).unwrap();
        write_videos(&path, &[record("c", 3)]).unwrap();

        assert_eq!(read_videos(&path), vec![record("c", 3)]);
    }

    #[test]
    fn output_is_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.json");

        write_videos(&path, &[record("a", 1)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"channelName\""));
    }

    #[test]
    fn empty_run_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.json");

        write_videos(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
