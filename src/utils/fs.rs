use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use crate::core::ImageJob;
use crate::utils::{PathError, PipelineError, PipelineResult, SourceFormat};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns the final path component for log lines, or the whole path when
/// there is none.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Returns `path` with its extension replaced, in the same directory.
pub fn sibling_with_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext)
}

/// Checks that `dir` exists and is a directory.
pub async fn validate_images_dir(dir: &Path) -> PipelineResult<()> {
    let meta = match fs::metadata(dir).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PathError::not_found(dir).into());
        }
        Err(e) => return Err(PathError::from(e).into()),
    };

    if !meta.is_dir() {
        return Err(PathError::not_directory(dir).into());
    }
    Ok(())
}

/// Lists qualifying images directly inside `dir`, sorted by file name.
///
/// Sub-directories and files whose extension is not on the allow-list are
/// skipped without being opened.
pub async fn scan_directory(dir: &Path) -> PipelineResult<Vec<ImageJob>> {
    validate_images_dir(dir).await?;

    let mut entries = fs::read_dir(dir).await.map_err(PathError::from)?;
    let mut jobs = Vec::new();
    let mut skipped = 0usize;

    while let Some(entry) = entries.next_entry().await.map_err(PathError::from)? {
        let path = entry.path();
        let file_type = entry.file_type().await.map_err(PathError::from)?;
        if !file_type.is_file() {
            skipped += 1;
            continue;
        }

        match SourceFormat::from_path(&path) {
            Some(format) => jobs.push(ImageJob::new(path, format)),
            None => skipped += 1,
        }
    }

    jobs.sort_by(|a, b| a.input_path.file_name().cmp(&b.input_path.file_name()));
    debug!(
        "Scanned {}: {} qualifying, {} skipped",
        dir.display(),
        jobs.len(),
        skipped
    );
    Ok(jobs)
}

/// Writes `bytes` to `path` via a temporary sibling and a rename.
///
/// Readers of `path` see either the previous content or the complete new
/// content, never a partial write. A file being replaced keeps its
/// permissions. The temporary file is removed on error.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> PipelineResult<()> {
    let temp_path = temp_sibling(path);

    let result: std::io::Result<()> = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);

        if let Ok(existing) = fs::metadata(path).await {
            fs::set_permissions(&temp_path, existing.permissions()).await?;
        }
        fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path).await;
        return Err(PipelineError::io(format!(
            "Failed to write {}: {e}",
            path.display()
        )));
    }
    Ok(())
}

/// Hidden temp name next to `path`; unique per process and call.
fn temp_sibling(path: &Path) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(
        ".{}.{}-{}.tmp",
        extract_filename(path),
        std::process::id(),
        n
    );
    path.with_file_name(name)
}
