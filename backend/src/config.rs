use crate::models::AdminToken;
use crate::services::aggregator::run_aggregation;
use crate::services::youtube::{VideoSource, YouTubeClient, DEFAULT_API_URL};
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{error, info, LevelFilter};
use rocket::http::{Method, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

lazy_static! {
    pub static ref YOUTUBE_API_URL: String =
        env::var("YOUTUBE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    pub static ref CHANNELS_FILE: PathBuf = env::var("CHANNELS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./channels.json"));
    pub static ref OUTPUT_FILE: PathBuf = env::var("OUTPUT_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("frontend").join("public").join("videos.json"));
    pub static ref STATIC_DIR: PathBuf = env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("frontend").join("dist"));
    pub static ref ADMIN_TOKEN: Option<String> =
        env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());
    pub static ref REFRESH_SCHEDULE: Option<String> =
        env::var("REFRESH_SCHEDULE").ok().filter(|s| !s.is_empty());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn youtube_api_key() -> Result<String> {
    env::var("YOUTUBE_API_KEY").context("YOUTUBE_API_KEY environment variable must be set")
}

pub fn create_youtube_client() -> Result<YouTubeClient> {
    let api_key = youtube_api_key()?;
    Ok(YouTubeClient::new(api_key, YOUTUBE_API_URL.as_str()))
}

async fn run_refresh(
    source: &dyn VideoSource,
    refresh_lock: &Mutex<()>,
    channels_file: &Path,
    output_file: &Path,
) -> Result<usize> {
    let _guard = refresh_lock.lock().await;
    run_aggregation(source, channels_file, output_file).await
}

/// Run the aggregator against the state's channel list and output file.
pub async fn refresh_videos(state: &AppState) -> Result<usize> {
    run_refresh(
        state.source.as_ref(),
        &state.refresh_lock,
        &state.channels_file,
        &state.output_file,
    )
    .await
}

pub async fn setup_refresh_scheduler(
    schedule: &str,
    source: Arc<dyn VideoSource>,
    refresh_lock: Arc<Mutex<()>>,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let refresh_job = Job::new_async(schedule, move |_uuid, _l| {
        let source = source.clone();
        let refresh_lock = refresh_lock.clone();
        Box::pin(async move {
            let result =
                run_refresh(source.as_ref(), &refresh_lock, &CHANNELS_FILE, &OUTPUT_FILE).await;
            match result {
                Ok(count) => info!("Scheduled refresh wrote {count} videos."),
                Err(e) => error!("Scheduled refresh failed: {e:#}"),
            }
        })
    })?;

    scheduler.add(refresh_job).await?;
    scheduler.start().await?;
    info!("Refresh scheduler started ({schedule}).");

    Ok(scheduler)
}

pub async fn create_app_state() -> Result<AppState> {
    let source: Arc<dyn VideoSource> = Arc::new(create_youtube_client()?);
    let refresh_lock = Arc::new(Mutex::new(()));

    let scheduler = match REFRESH_SCHEDULE.as_deref() {
        Some(schedule) => {
            Some(setup_refresh_scheduler(schedule, source.clone(), refresh_lock.clone()).await?)
        }
        None => {
            info!("REFRESH_SCHEDULE not set, videos are only refreshed on demand.");
            None
        }
    };

    Ok(AppState {
        source,
        channels_file: CHANNELS_FILE.clone(),
        output_file: OUTPUT_FILE.clone(),
        admin_token: ADMIN_TOKEN.clone(),
        refresh_lock,
        scheduler: Mutex::new(scheduler),
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            "Authorization",
            "Accept",
            "Content-Type",
        ]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminToken {
    type Error = &'static str;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let expected = request
            .rocket()
            .state::<AppState>()
            .and_then(|state| state.admin_token.as_deref());
        let Some(expected) = expected else {
            return Outcome::Error((Status::Unauthorized, "Admin endpoints are disabled"));
        };

        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(|auth| auth.strip_prefix("Bearer "));

        match token {
            Some(t) => {
                if t == expected {
                    Outcome::Success(AdminToken(t.to_string()))
                } else {
                    Outcome::Error((Status::Unauthorized, "Invalid token"))
                }
            }
            None => Outcome::Error((Status::Unauthorized, "Missing token")),
        }
    }
}
