use crate::models::Channel;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_channels(path: &Path) -> Result<Vec<Channel>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read channel list {}", path.display()))?;
    let channels: Vec<Channel> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid channel list {}", path.display()))?;
    Ok(channels)
}
