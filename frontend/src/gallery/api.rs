use crate::env_variable_utils::GALLERY_ENV;
use crate::models::VideoRecord;
use gloo_net::http::Request;

pub async fn load_videos() -> Result<Vec<VideoRecord>, String> {
    let response = Request::get(&GALLERY_ENV.videos_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<VideoRecord>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
