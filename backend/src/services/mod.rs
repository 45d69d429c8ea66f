pub mod aggregator;
pub mod channel_service;
pub mod fetcher;
pub mod video_service;
pub mod youtube;

#[cfg(test)]
pub mod fake_source;
