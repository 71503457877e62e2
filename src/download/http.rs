use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
// Per-read timeout, not a cap on total transfer time: large archives may
// legitimately take minutes, a stalled socket may not.
const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Download `url` to `path` with a streamed response body.
///
/// The body is written to a sibling temp file and renamed into place after a
/// successful sync, so a failed transfer never leaves a partial file at the
/// destination path.
pub fn download_file(url: &str, path: &Path) -> Result<()> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .build();

    let response = agent
        .get(url)
        .call()
        .with_context(|| format!("Failed to download: {url}"))?;

    if response.status() != 200 {
        return Err(anyhow::anyhow!(
            "Download failed with status {} for: {url}",
            response.status()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Stream to a temporary file in the same directory as the target file
    let temp_path = path.with_extension(format!(
        "{}.tmp",
        path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("download")
    ));

    let mut temp_file = fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create temporary file: {}", temp_path.display()))?;

    std::io::copy(&mut response.into_reader(), &mut temp_file).with_context(|| {
        let _ = fs::remove_file(&temp_path);
        format!("Failed to write to temporary file: {}", temp_path.display())
    })?;

    temp_file.sync_all().with_context(|| {
        let _ = fs::remove_file(&temp_path);
        format!("Failed to sync temporary file: {}", temp_path.display())
    })?;
    drop(temp_file);

    // Atomically move the temporary file to the final location
    fs::rename(&temp_path, path).with_context(|| {
        let _ = fs::remove_file(&temp_path);
        format!(
            "Failed to move temporary file to final location: {} -> {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
