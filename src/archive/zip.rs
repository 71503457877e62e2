use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use zip::ZipArchive;

/// Extract a ZIP archive into `dest`, creating it if needed.
pub fn extract_zip(zip_path: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("Failed to open zip file: {}", zip_path.display()))?;

    let mut archive = ZipArchive::new(file).with_context(|| "Failed to read zip archive")?;

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create extraction directory: {}", dest.display()))?;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .with_context(|| format!("Failed to access zip entry {i}"))?;

        let outpath = dest.join(file.mangled_name());

        if file.name().ends_with('/') {
            fs::create_dir_all(&outpath)
                .with_context(|| format!("Failed to create directory: {}", outpath.display()))?;
        } else {
            if let Some(parent) = outpath.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create parent directory: {}", parent.display())
                })?;
            }

            let mut outfile = fs::File::create(&outpath).with_context(|| {
                format!("Failed to create extracted file: {}", outpath.display())
            })?;

            std::io::copy(&mut file, &mut outfile)
                .with_context(|| format!("Failed to extract file: {}", outpath.display()))?;
        }

        // Restore mode bits recorded in the archive on Unix-like systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = file.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;

    fn build_zip(dest: &Path, name: &str, content: &[u8]) {
        let file = fs::File::create(dest).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = FileOptions::default().unix_permissions(0o755);
        writer.start_file(name, options).unwrap();
        writer.write_all(content).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_single_binary() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("wharfd_Windows_x86_64.zip");
        build_zip(&archive_path, "wharfd.exe", b"MZ fake executable");

        let dest = temp.path().join("out");
        extract_zip(&archive_path, &dest).unwrap();

        let extracted = dest.join("wharfd.exe");
        assert!(extracted.is_file());
        assert_eq!(fs::read(&extracted).unwrap(), b"MZ fake executable");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("release.zip");
        build_zip(&archive_path, "wharfd.exe", b"binary-bytes");

        let first = temp.path().join("first");
        let second = temp.path().join("second");
        extract_zip(&archive_path, &first).unwrap();
        extract_zip(&archive_path, &second).unwrap();

        assert_eq!(
            fs::read(first.join("wharfd.exe")).unwrap(),
            fs::read(second.join("wharfd.exe")).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_preserves_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("release.zip");
        build_zip(&archive_path, "wharfd", b"binary-bytes");

        let dest = temp.path().join("out");
        extract_zip(&archive_path, &dest).unwrap();

        let mode = fs::metadata(dest.join("wharfd")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_extract_garbage_fails() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("broken.zip");
        fs::write(&archive_path, b"not a zip archive").unwrap();

        let result = extract_zip(&archive_path, &temp.path().join("out"));
        assert!(result.is_err());
    }
}
