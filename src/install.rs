use crate::download::http;
use crate::release::Release;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for installing the wharfd binary
#[derive(Default)]
pub struct InstallOptions {
    /// Directory to install into; defaults to the directory containing the
    /// running bootstrap executable, so the launcher finds the binary later.
    pub dir: Option<PathBuf>,
}

/// Resolve the platform, download the matching release archive, extract the
/// binary and finalize. Platform and architecture are resolved before any
/// network activity, so an unsupported host never hits the wire.
pub fn install(opts: InstallOptions) -> Result<()> {
    let release = Release::current()?;

    let dir = match opts.dir {
        Some(dir) => dir,
        None => default_install_dir()?,
    };

    install_release(&release, &release.download_url(), &dir)
}

/// Directory containing the running bootstrap executable.
pub fn default_install_dir() -> Result<PathBuf> {
    let current_exe = std::env::current_exe().context("Failed to get current executable path")?;
    current_exe
        .parent()
        .map(|p| p.to_path_buf())
        .context("Failed to get parent directory of current executable")
}

fn install_release(release: &Release, url: &str, dir: &Path) -> Result<()> {
    let archive_path = dir.join(release.asset_filename());

    println!("Downloading {url}...");
    http::download_file(url, &archive_path)?;

    println!("Extracting {}...", release.asset_filename());
    release
        .archive_format()
        .extract(&archive_path, dir)
        .with_context(|| format!("Failed to extract: {}", archive_path.display()))?;

    finalize(&archive_path, &dir.join(release.executable_name()))
}

/// Delete the archive, make the extracted binary executable on non-Windows
/// targets and report completion.
fn finalize(archive_path: &Path, executable: &Path) -> Result<()> {
    fs::remove_file(archive_path)
        .with_context(|| format!("Failed to remove archive: {}", archive_path.display()))?;

    if !executable.is_file() {
        return Err(anyhow::anyhow!(
            "Archive did not contain the expected executable: {}",
            executable.display()
        ));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(executable, perms).with_context(|| {
            format!(
                "Failed to set executable permissions: {}",
                executable.display()
            )
        })?;
    }

    println!("Installation complete!");
    Ok(())
}
