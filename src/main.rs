use anyhow::Result;

fn main() -> Result<()> {
    wharfd_bootstrap::cli::run()
}
