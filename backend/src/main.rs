use backend::build_rocket;
use backend::config::{create_app_state, create_cors, init_logger, load_environment, STATIC_DIR};
use log::info;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();
    info!("Starting Rocket backend...");

    let state = create_app_state().await?;
    let cors = create_cors()?;

    info!(
        "Serving {} and gallery assets from {}",
        state.output_file.display(),
        STATIC_DIR.display()
    );

    let _rocket = build_rocket(state, &STATIC_DIR)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
