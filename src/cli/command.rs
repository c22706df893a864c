use thiserror::Error;

/// One line of shell input, parsed. Indices are zero-based here; the shell
/// language itself counts from 1, and parsing does the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddParticipant { name: String },
    RemoveParticipant { index: usize },
    RemoveCharge { index: usize, charge: usize },
    Pick { index: usize },
    Charge { raw_amount: String },
    SetTaxRate { raw: String },
    SetFees { raw: String },
    Show,
    Json,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for the command list)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("expected a number of 1 or more, got '{0}'")]
    InvalidIndex(String),
}

/// Parse one line of input into a [`Command`].
///
/// The command word is case-insensitive. `add` takes the rest of the line
/// verbatim as the name, so names may contain spaces. `charge`, `tax` and
/// `fees` also pass the rest of the line through untouched; deciding
/// whether it is a usable amount is the ledger's job, not the parser's.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                Err(CommandError::Usage("add <name>"))
            } else {
                Ok(Command::AddParticipant {
                    name: rest.to_string(),
                })
            }
        }
        "rm" => parse_remove(rest),
        "pick" => {
            let tokens: Vec<&str> = rest.split_whitespace().collect();
            match tokens.as_slice() {
                [index] => Ok(Command::Pick {
                    index: parse_index(index)?,
                }),
                _ => Err(CommandError::Usage("pick <participant>")),
            }
        }
        "charge" => Ok(Command::Charge {
            raw_amount: rest.to_string(),
        }),
        "tax" => Ok(Command::SetTaxRate {
            raw: rest.to_string(),
        }),
        "fees" => Ok(Command::SetFees {
            raw: rest.to_string(),
        }),
        "show" => expect_no_args("show", rest).map(|_| Command::Show),
        "json" => expect_no_args("json", rest).map(|_| Command::Json),
        "help" => expect_no_args("help", rest).map(|_| Command::Help),
        "quit" | "exit" => expect_no_args("quit", rest).map(|_| Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// `rm <participant>` drops a participant, `rm <participant> <charge>`
/// drops a single charge.
fn parse_remove(rest: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    match tokens.as_slice() {
        [index] => Ok(Command::RemoveParticipant {
            index: parse_index(index)?,
        }),
        [index, charge] => Ok(Command::RemoveCharge {
            index: parse_index(index)?,
            charge: parse_index(charge)?,
        }),
        _ => Err(CommandError::Usage("rm <participant> [charge]")),
    }
}

/// Shell indices count from 1; convert to zero-based.
fn parse_index(token: &str) -> Result<usize, CommandError> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::InvalidIndex(token.to_string())),
    }
}

fn expect_no_args(usage: &'static str, rest: &str) -> Result<(), CommandError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}
