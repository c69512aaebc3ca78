//! Line commands understood by a datebook session.

pub mod add;
pub mod config;
pub mod del;
pub mod find;
pub mod print;

use datebook_core::{DateError, EventStore};
use std::fmt;

/// A single input line, split into its command and arguments.
///
/// Missing arguments become empty strings, which the date parser rejects.
/// Extra tokens are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Add { date: &'a str, event: &'a str },
    Del {
        date: &'a str,
        event: Option<&'a str>,
    },
    Find { date: &'a str },
    Print,
    Exit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Returns None for blank lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;

        let command = match name {
            "Add" => Command::Add {
                date: tokens.next().unwrap_or_default(),
                event: tokens.next().unwrap_or_default(),
            },
            "Del" => Command::Del {
                date: tokens.next().unwrap_or_default(),
                event: tokens.next(),
            },
            "Find" => Command::Find {
                date: tokens.next().unwrap_or_default(),
            },
            "Print" => Command::Print,
            "Exit" => Command::Exit,
            other => Command::Unknown(other),
        };

        Some(command)
    }

    pub fn execute(self, store: &mut EventStore) -> Reply {
        let result = match self {
            Command::Add { date, event } => add::run(store, date, event),
            Command::Del { date, event } => del::run(store, date, event),
            Command::Find { date } => find::run(store, date),
            Command::Print => Ok(print::run(store)),
            Command::Exit => return Reply::Exit,
            Command::Unknown(name) => {
                return Reply::Failed(Failure::UnknownCommand(name.to_string()));
            }
        };

        match result {
            Ok(lines) => Reply::Lines(lines),
            Err(e) => Reply::Failed(Failure::Date(e)),
        }
    }
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Output lines, possibly none
    Lines(Vec<String>),
    /// The command could not be carried out; the session continues
    Failed(Failure),
    /// Stop reading input
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Date(DateError),
    UnknownCommand(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::Date(e) => write!(f, "{}", e),
            Failure::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
        }
    }
}
