use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::path::Path;
use tar::Archive;

/// Extract a TAR.GZ archive into `dest`, creating it if needed.
pub fn extract_tar_gz(tar_path: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(tar_path)
        .with_context(|| format!("Failed to open tar.gz file: {}", tar_path.display()))?;

    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create extraction directory: {}", dest.display()))?;

    for entry in archive
        .entries()
        .with_context(|| "Failed to read tar.gz entries")?
    {
        let mut entry = entry.with_context(|| "Failed to access tar.gz entry")?;

        let path = entry.path().with_context(|| "Failed to get entry path")?;
        let outpath = dest.join(&path);

        if let Some(parent) = outpath.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory: {}", parent.display())
            })?;
        }

        // unpack preserves the mode bits recorded in the archive
        entry
            .unpack(&outpath)
            .with_context(|| format!("Failed to extract file: {}", outpath.display()))?;
    }

    Ok(())
}
