use anyhow::Result;

/// Canonical operating-system category used in release asset names.
///
/// The variants spell exactly like the goreleaser-style tokens in the asset
/// filenames (`wharfd_Darwin_arm64.tar.gz` etc.), so `as_str` is the single
/// source of truth for URL construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

/// Canonical CPU-architecture category used in release asset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Arm64,
}

impl Platform {
    /// Resolve from the OS's reported platform string (`std::env::consts::OS`).
    /// Unknown values are an error; nothing is defaulted.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            _ => Err(anyhow::anyhow!("Unsupported platform: {os}")),
        }
    }

    /// Resolve the platform the bootstrap itself is running on.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "Darwin",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
        }
    }

    /// Release archives are zipped on Windows, gzipped tarballs elsewhere.
    pub fn archive_ext(&self) -> &'static str {
        match self {
            Platform::Windows => "zip",
            _ => "tar.gz",
        }
    }

    /// Name of the executable the archive contains.
    pub fn executable_name(&self) -> &'static str {
        match self {
            Platform::Windows => "wharfd.exe",
            _ => "wharfd",
        }
    }
}

impl Arch {
    /// Resolve from the reported CPU architecture (`std::env::consts::ARCH`).
    pub fn from_arch(arch: &str) -> Result<Self> {
        match arch {
            "x86_64" => Ok(Arch::X86_64),
            "aarch64" => Ok(Arch::Arm64),
            _ => Err(anyhow::anyhow!("Unsupported architecture: {arch}")),
        }
    }

    pub fn current() -> Result<Self> {
        Self::from_arch(std::env::consts::ARCH)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Arm64 => "arm64",
        }
    }
}
