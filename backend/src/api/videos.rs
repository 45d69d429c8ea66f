use crate::AppState;
use log::warn;
use rocket::fs::NamedFile;
use rocket::{get, State};

/// The gallery artifact as last written by the aggregator.
#[get("/videos.json")]
pub async fn videos_json(state: &State<AppState>) -> Option<NamedFile> {
    match NamedFile::open(&state.output_file).await {
        Ok(file) => Some(file),
        Err(e) => {
            warn!("No video artifact at {}: {e}", state.output_file.display());
            None
        }
    }
}
