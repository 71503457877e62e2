pub mod tar;
pub mod zip;

use crate::platform::Platform;
use anyhow::Result;
use std::path::Path;

/// Archive format of a release asset. Closed two-case variant keyed purely
/// on platform: Windows releases ship zips, everything else tar.gz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => ArchiveFormat::Zip,
            _ => ArchiveFormat::TarGz,
        }
    }

    /// Extract the archive into `dest`. Both strategies run to completion
    /// before returning; extraction never overlaps download or cleanup.
    pub fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        match self {
            ArchiveFormat::TarGz => tar::extract_tar_gz(archive, dest),
            ArchiveFormat::Zip => zip::extract_zip(archive, dest),
        }
    }
}
