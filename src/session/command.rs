//! Commands typed at the session prompt.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PdfMergerError;

/// Help text shown by the `help` command.
pub const HELP: &[(&str, &str)] = &[
    ("add [FILE|GLOB ...]", "Add PDFs (prompts when no files are given)"),
    ("remove ROW ...", "Remove the given rows"),
    ("remove-name NAME ...", "Remove every row with that file name"),
    ("move FROM TO", "Move a row to a new position"),
    ("list", "Show the selected files"),
    ("merge [OUTPUT]", "Merge the selection (prompts for OUTPUT)"),
    ("reset", "Clear the selection"),
    ("help", "Show this help"),
    ("quit", "Leave"),
];

/// A parsed session command. Row numbers are zero-based here; users type
/// them one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add files; an empty list opens the file picker.
    Add(Vec<String>),
    /// Remove rows by position.
    Remove(Vec<usize>),
    /// Remove every row with one of these display names.
    RemoveName(Vec<String>),
    /// Move a row.
    Move {
        /// Current position.
        from: usize,
        /// New position.
        to: usize,
    },
    /// Show the selection.
    List,
    /// Merge the selection, optionally straight into the given file.
    Merge(Option<PathBuf>),
    /// Clear the selection.
    Reset,
    /// Show help.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = PdfMergerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = shlex::split(line).ok_or_else(|| invalid(line, "unbalanced quotes"))?;
        let Some((name, args)) = words.split_first() else {
            return Err(invalid(line, "empty command"));
        };

        match name.as_str() {
            "add" | "a" => Ok(Self::Add(args.to_vec())),
            "remove" | "rm" => {
                if args.is_empty() {
                    return Err(invalid(line, "expected at least one row number"));
                }
                let rows = args
                    .iter()
                    .map(|arg| parse_row(line, arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Remove(rows))
            }
            "remove-name" => {
                if args.is_empty() {
                    return Err(invalid(line, "expected at least one file name"));
                }
                Ok(Self::RemoveName(args.to_vec()))
            }
            "move" | "mv" => match args {
                [from, to] => Ok(Self::Move {
                    from: parse_row(line, from)?,
                    to: parse_row(line, to)?,
                }),
                _ => Err(invalid(line, "expected FROM and TO row numbers")),
            },
            "list" | "ls" => Ok(Self::List),
            "merge" | "m" => match args {
                [] => Ok(Self::Merge(None)),
                [output] => Ok(Self::Merge(Some(PathBuf::from(output)))),
                _ => Err(invalid(line, "expected at most one output path")),
            },
            "reset" | "clear" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(invalid(line, format!("unknown command '{other}'"))),
        }
    }
}

fn parse_row(line: &str, arg: &str) -> Result<usize, PdfMergerError> {
    match arg.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(invalid(
            line,
            format!("'{arg}' is not a row number (rows start at 1)"),
        )),
    }
}

fn invalid(line: &str, reason: impl Into<String>) -> PdfMergerError {
    PdfMergerError::InvalidCommand {
        input: line.to_owned(),
        reason: reason.into(),
    }
}
