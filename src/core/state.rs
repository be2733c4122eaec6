//! Process-wide libvips runtime.

use lazy_static::lazy_static;
use tracing::debug;
use crate::utils::{PipelineError, PipelineResult};

/// Thread-safe guard for the libvips `VipsApp` lifecycle.
///
/// `VipsApp` initializes the libvips thread pool and global state on creation
/// and shuts it down on drop. The guard lives in a static, so libvips stays up
/// until the process exits and is never shut down under a running job.
///
/// # Safety
/// libvips is designed for concurrent multi-threaded use. Operations on
/// separate `VipsImage` instances from different threads are safe.
struct VipsAppGuard(#[allow(dead_code)] libvips::VipsApp);

// Individual VipsImage instances are never shared between threads; only the
// global init handle is.
unsafe impl Send for VipsAppGuard {}
unsafe impl Sync for VipsAppGuard {}

lazy_static! {
    static ref VIPS: PipelineResult<VipsAppGuard> = init_vips();
}

fn init_vips() -> PipelineResult<VipsAppGuard> {
    let vips = libvips::VipsApp::default("site-images")
        .map_err(|e| PipelineError::processing(format!("Failed to initialize libvips: {e}")))?;
    // 0 = let libvips decide based on available CPU cores
    vips.concurrency_set(0);
    debug!("libvips initialized (concurrency: {})", vips.concurency_get());
    Ok(VipsAppGuard(vips))
}

/// Initializes libvips on first call; later calls return the cached outcome.
///
/// Every job calls this before touching an image.
pub fn ensure_vips() -> PipelineResult<()> {
    VIPS.as_ref().map(|_| ()).map_err(Clone::clone)
}
