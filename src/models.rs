use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Download and install the wharfd release matching this bootstrap's version
    Install {
        /// Directory to install into (defaults to the directory containing this executable)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Run the installed wharfd, forwarding all arguments and its exit code
    Run {
        /// Arguments to pass through to wharfd
        #[arg(last = true)]
        args: Vec<String>,
    },
}
