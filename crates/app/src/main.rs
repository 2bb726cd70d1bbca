use anyhow::Result;
use clap::Parser;
use parlor::cli::Cli;
use parlor::logging::init_logging;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    parlor::run(cli)
}
