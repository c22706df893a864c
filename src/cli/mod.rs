mod command;
mod render;
mod shell;

pub use command::{Command, CommandError, parse_line};
pub use render::{help_text, render_snapshot};
pub use shell::{Action, Session};

use anyhow::Result;
use clap::Parser;

/// Divvy - Interactive Bill Splitter
#[derive(Parser)]
#[command(name = "divvy")]
#[command(about = "Split a bill: itemized charges per person, tax on subtotals, fees shared evenly")]
#[command(version)]
pub struct Cli {
    /// Hide the per-charge lines under each participant
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        shell::run(self.compact, self.verbose)
    }
}
