use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// A channel entry from the channel list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub name: String,
    pub channel_id: String,
}

/// One item of a `search` response, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub thumbnail_url: String,
}

/// One item of a `videos` response, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetail {
    pub video_id: String,
    pub iso_duration: String,
    pub view_count: u64,
}

/// The entity written to `videos.json` and read back by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub channel_name: String,
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub thumbnail: String,
    pub views: u64,
}

impl VideoRecord {
    pub fn from_parts(channel: &Channel, snippet: &SearchResult, detail: &VideoDetail) -> Self {
        VideoRecord {
            channel_name: channel.name.clone(),
            video_id: detail.video_id.clone(),
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            published_at: snippet.published_at.clone(),
            thumbnail: snippet.thumbnail_url.clone(),
            views: detail.view_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminToken(pub String);

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub videos_written: usize,
    pub refreshed_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(Status::InternalServerError)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
