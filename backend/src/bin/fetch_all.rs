use backend::config::{
    create_youtube_client, init_logger, load_environment, CHANNELS_FILE, OUTPUT_FILE,
};
use backend::services::aggregator::run_aggregation;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let youtube = create_youtube_client()?;
    info!("Reading channels from {}", CHANNELS_FILE.display());

    let count = run_aggregation(&youtube, &CHANNELS_FILE, &OUTPUT_FILE).await?;
    info!("Aggregated {count} videos.");

    Ok(())
}
