use crate::config::refresh_videos;
use crate::models::{AdminToken, ErrorResponse, RefreshResponse};
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{post, State};

#[post("/refresh")]
pub async fn admin_refresh(
    _token: AdminToken,
    state: &State<AppState>,
) -> Result<Json<RefreshResponse>, ErrorResponse> {
    info!("Manual refresh requested.");

    match refresh_videos(state).await {
        Ok(videos_written) => Ok(Json(RefreshResponse {
            success: true,
            message: format!("Wrote {videos_written} videos"),
            videos_written,
            refreshed_at: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            error!("Manual refresh failed: {e:#}");
            Err(ErrorResponse {
                error: "Refresh failed".to_string(),
                message: format!("{e:#}"),
            })
        }
    }
}

#[rocket::options("/refresh")]
pub fn admin_refresh_options() -> rocket::response::status::NoContent {
    rocket::response::status::NoContent
}
