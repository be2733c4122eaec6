// Downsizes and recompresses every PNG/JPEG in the site's images directory, in place.

use site_images_lib::commands::{init_tracing, optimize_command, run_optimize};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = optimize_command().get_matches();
    init_tracing();

    info!("=== Image optimization starting ===");
    run_optimize(&matches).await?;
    Ok(())
}
