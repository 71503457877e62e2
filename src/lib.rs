use anyhow::Result;

// Public modules
pub mod models;
pub mod cli;
pub mod platform;
pub mod release;
pub mod download;
pub mod archive;
pub mod install;
pub mod runner;

// Re-export commonly used types
pub use platform::{Arch, Platform};
pub use release::Release;
pub use anyhow::{Context, Result as AnyhowResult};

// Common type alias
pub type BootstrapResult<T> = Result<T>;
