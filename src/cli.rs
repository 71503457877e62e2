use crate::models::{Args, Commands};
use anyhow::Result;
use clap::Parser;

/// Main CLI entry point
pub fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Install { dir } => {
            crate::install::install(crate::install::InstallOptions { dir })?;
        }
        Commands::Run { args } => {
            let code = crate::runner::run(&args)?;
            std::process::exit(code);
        }
    }

    Ok(())
}
