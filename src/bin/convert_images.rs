// Writes a WebP (or AVIF) sibling for every PNG/JPEG in the site's images directory.

use site_images_lib::commands::{convert_command, init_tracing, run_convert};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = convert_command().get_matches();
    init_tracing();

    info!("=== Format conversion starting ===");
    run_convert(&matches).await?;
    Ok(())
}
