pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use rocket::fs::{FileServer, Options};
use rocket::{routes, Build, Rocket};
use services::youtube::VideoSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

pub struct AppState {
    pub source: Arc<dyn VideoSource>,
    pub channels_file: PathBuf,
    pub output_file: PathBuf,
    /// `None` disables the admin endpoints.
    pub admin_token: Option<String>,
    /// Serialises aggregation runs between the scheduler and the admin endpoint.
    pub refresh_lock: Arc<Mutex<()>>,
    pub scheduler: Mutex<Option<JobScheduler>>,
}

/// Routes and managed state, without CORS.
pub fn build_rocket(state: AppState, static_dir: &Path) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::videos_json])
        .mount(
            "/",
            FileServer::new(static_dir, Options::Index | Options::Missing).rank(20),
        )
        .mount(
            "/admin",
            routes![api::admin_refresh, api::admin_refresh_options],
        )
}
