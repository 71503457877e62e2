use crate::install::default_install_dir;
use crate::platform::Platform;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run the installed wharfd with the given arguments, returning its exit
/// code so the caller can terminate the bootstrap process with it.
pub fn run(args: &[String]) -> Result<i32> {
    let executable = locate_executable()?;
    run_executable(&executable, args)
}

/// Resolve the platform-specific executable next to the bootstrap's own
/// location. Absence means install never ran (or ran elsewhere).
pub fn locate_executable() -> Result<PathBuf> {
    let platform = Platform::current()?;
    let path = default_install_dir()?.join(platform.executable_name());

    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "wharfd is not installed at {} (run `wharfd-bootstrap install` first)",
            path.display()
        ));
    }

    Ok(path)
}

/// Spawn the executable with stdio inherited from the parent and wait for it
/// to exit. A child killed by a signal has no exit code; that maps to 1.
pub fn run_executable(executable: &Path, args: &[String]) -> Result<i32> {
    let status = Command::new(executable)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute: {}", executable.display()))?;

    Ok(status.code().unwrap_or(1))
}
