use crate::archive::ArchiveFormat;
use crate::platform::{Arch, Platform};
use anyhow::Result;

/// GitHub repository the release archives are published under.
pub const REPO: &str = "wharf-dev/wharfd";

/// Version of wharfd this bootstrap installs. Stamped by build.rs; always in
/// lockstep with the crate's own version, so an installed binary can never
/// drift from the package that fetched it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Descriptor naming exactly one remote release asset: the (version,
/// platform, arch) tuple fully determines the asset filename, the download
/// URL and the executable the archive contains.
#[derive(Debug, Clone, Copy)]
pub struct Release {
    pub version: &'static str,
    pub platform: Platform,
    pub arch: Arch,
}

impl Release {
    pub fn new(version: &'static str, platform: Platform, arch: Arch) -> Self {
        Release {
            version,
            platform,
            arch,
        }
    }

    /// Descriptor for the running host. Fails on an unsupported platform or
    /// architecture before any network activity happens.
    pub fn current() -> Result<Self> {
        Ok(Release::new(VERSION, Platform::current()?, Arch::current()?))
    }

    /// Asset filename, e.g. `wharfd_Linux_x86_64.tar.gz`.
    pub fn asset_filename(&self) -> String {
        format!(
            "wharfd_{}_{}.{}",
            self.platform.as_str(),
            self.arch.as_str(),
            self.platform.archive_ext()
        )
    }

    /// Release download URL for this descriptor, tag prefixed with `v`.
    pub fn download_url(&self) -> String {
        format!(
            "https://github.com/{REPO}/releases/download/v{}/{}",
            self.version,
            self.asset_filename()
        )
    }

    pub fn archive_format(&self) -> ArchiveFormat {
        ArchiveFormat::for_platform(self.platform)
    }

    pub fn executable_name(&self) -> &'static str {
        self.platform.executable_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PLATFORMS: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Windows];
    const ALL_ARCHS: [Arch; 2] = [Arch::X86_64, Arch::Arm64];

    #[test]
    fn test_asset_filename_encodes_all_pairs() {
        for platform in ALL_PLATFORMS {
            for arch in ALL_ARCHS {
                let release = Release::new("1.2.3", platform, arch);
                let expected = format!(
                    "wharfd_{}_{}.{}",
                    platform.as_str(),
                    arch.as_str(),
                    platform.archive_ext()
                );
                assert_eq!(release.asset_filename(), expected);
            }
        }
    }

    #[test]
    fn test_zip_extension_iff_windows() {
        for platform in ALL_PLATFORMS {
            for arch in ALL_ARCHS {
                let name = Release::new("1.2.3", platform, arch).asset_filename();
                if platform == Platform::Windows {
                    assert!(name.ends_with(".zip"), "{name}");
                } else {
                    assert!(name.ends_with(".tar.gz"), "{name}");
                }
            }
        }
    }

    #[test]
    fn test_download_url_shape() {
        let release = Release::new("0.3.2", Platform::Darwin, Arch::Arm64);
        assert_eq!(
            release.download_url(),
            "https://github.com/wharf-dev/wharfd/releases/download/v0.3.2/wharfd_Darwin_arm64.tar.gz"
        );

        let release = Release::new("0.3.2", Platform::Windows, Arch::X86_64);
        assert_eq!(
            release.download_url(),
            "https://github.com/wharf-dev/wharfd/releases/download/v0.3.2/wharfd_Windows_x86_64.zip"
        );
    }

    #[test]
    fn test_version_tag_is_v_prefixed() {
        let release = Release::new("2.0.0-rc.1", Platform::Linux, Arch::X86_64);
        assert!(
            release
                .download_url()
                .contains("/releases/download/v2.0.0-rc.1/")
        );
    }

    #[test]
    fn test_current_release_uses_package_version() {
        let release = Release::current().unwrap();
        assert_eq!(release.version, VERSION);
    }
}
