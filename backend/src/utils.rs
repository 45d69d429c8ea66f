use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO8601_DURATION: Regex =
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid");
}

/// Parse ISO8601 duration string (PT1H2M3S) to total seconds.
///
/// Components that are absent count as zero. Returns `None` when the string
/// has no `PT` section at all (e.g. day-based durations like `P1D`).
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> Option<u64> {
    let captures = ISO8601_DURATION.captures(duration_str)?;

    let component = |index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    let hours = component(1);
    let minutes = component(2);
    let seconds = component(3);

    Some(
        hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds),
    )
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
