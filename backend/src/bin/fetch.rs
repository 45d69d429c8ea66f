use backend::config::{create_youtube_client, init_logger, load_environment};
use backend::services::fetcher::{print_latest, DEFAULT_CHANNEL_ID};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let youtube = create_youtube_client()?;
    print_latest(&youtube, DEFAULT_CHANNEL_ID, &mut io::stdout()).await
}
