use anyhow::Result;
use clap::Parser;
use divvy::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
