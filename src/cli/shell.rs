use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::domain::{Ledger, LedgerSnapshot};

use super::command::{Command, parse_line};
use super::render::{help_text, render_snapshot};

/// Interactive session state: the ledger plus which participant new
/// charges currently go to.
///
/// The selection tracks a position on the roster. Adding participants
/// never moves it; removing the selected participant clears it, and
/// removing an earlier one shifts it down so it stays on the same person.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    selected: Option<usize>,
}

/// What the loop should do after applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the current split.
    Render,
    /// Print the current split as JSON.
    Json,
    /// Print a one-line hint instead of the table.
    Message(String),
    Help,
    Nothing,
    Quit,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Apply one command to the session and decide what to show.
    ///
    /// Index commands are checked here so the user gets a hint; the ledger
    /// itself would just ignore an out-of-range index. Raw amounts are
    /// passed straight through, and input the ledger ignores simply leaves
    /// the re-rendered table unchanged.
    pub fn apply(&mut self, command: Command) -> Action {
        match command {
            Command::AddParticipant { name } => {
                let before = self.ledger.participant_count();
                self.ledger.add_participant(&name);
                if self.ledger.participant_count() > before {
                    Action::Render
                } else {
                    Action::Message(format!("'{}' is already on the bill", name.trim()))
                }
            }
            Command::RemoveParticipant { index } => {
                if index >= self.ledger.participant_count() {
                    Action::Message(no_such_participant(index))
                } else {
                    self.ledger.remove_participant(index);
                    self.selected = match self.selected {
                        Some(s) if s == index => None,
                        Some(s) if s > index => Some(s - 1),
                        keep => keep,
                    };
                    Action::Render
                }
            }
            Command::RemoveCharge { index, charge } => {
                if index >= self.ledger.participant_count() {
                    Action::Message(no_such_participant(index))
                } else if charge >= self.ledger.charge_count(index) {
                    Action::Message(format!(
                        "participant {} has no charge {}",
                        index + 1,
                        charge + 1
                    ))
                } else {
                    self.ledger.remove_charge(index, charge);
                    Action::Render
                }
            }
            Command::Pick { index } => {
                if index >= self.ledger.participant_count() {
                    Action::Message(no_such_participant(index))
                } else {
                    self.selected = Some(index);
                    Action::Render
                }
            }
            Command::Charge { raw_amount } => match self.selected {
                None => Action::Message("no participant selected (use 'pick <n>')".to_string()),
                Some(index) => {
                    self.ledger.add_charge(index, &raw_amount);
                    Action::Render
                }
            },
            Command::SetTaxRate { raw } => {
                self.ledger.set_tax_rate(&raw);
                Action::Render
            }
            Command::SetFees { raw } => {
                self.ledger.set_shared_fees_and_tips(&raw);
                Action::Render
            }
            Command::Show => Action::Render,
            Command::Json => Action::Json,
            Command::Help => Action::Help,
            Command::Quit => Action::Quit,
            Command::Empty => Action::Nothing,
        }
    }
}

fn no_such_participant(index: usize) -> String {
    format!("no participant numbered {}", index + 1)
}

/// Run the interactive shell until `quit` or end of input.
pub fn run(compact: bool, verbose: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new();
    let mut input = String::new();

    println!("divvy - split a bill across participants");
    println!("Type 'help' for commands, 'quit' to leave.");
    println!();
    println!(
        "{}",
        render_snapshot(&session.snapshot(), session.selected(), compact)
    );

    loop {
        print!("split> ");
        io::stdout().flush().context("failed to write prompt")?;

        input.clear();
        if stdin.read_line(&mut input).context("failed to read input")? == 0 {
            // End of input counts as quitting.
            println!();
            break;
        }

        let command = match parse_line(&input) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        if verbose {
            eprintln!("[cmd] {:?}", command);
        }

        match session.apply(command) {
            Action::Render => println!(
                "{}",
                render_snapshot(&session.snapshot(), session.selected(), compact)
            ),
            Action::Json => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            Action::Message(message) => println!("{}", message),
            Action::Help => println!("{}", help_text()),
            Action::Nothing => {}
            Action::Quit => {
                println!("Goodbye!");
                break;
            }
        }
    }

    Ok(())
}
