//! Line commands accepted by the terminal dashboard.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::UserId;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search query; empty clears it.
    Search(String),
    /// Jump to a page.
    Page(usize),
    /// Next page.
    Next,
    /// Previous page.
    Previous,
    /// Set the entry form's name field.
    Name(String),
    /// Set the entry form's email field.
    Email(String),
    /// Submit the entry form.
    Submit,
    /// Delete a user.
    Delete(UserId),
    /// Re-apply the current user list.
    Refresh,
    /// Close the notification banner.
    Dismiss,
    /// Print the command list.
    Help,
    /// Leave the dashboard.
    Quit,
}

/// Reasons an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing but whitespace was entered.
    #[error("empty command; type `help` for a list of commands")]
    Empty,
    /// The first word is not a command.
    #[error("unknown command `{0}`; type `help` for a list of commands")]
    Unknown(String),
    /// The command needs an argument that was not given.
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
    },
    /// The argument could not be parsed.
    #[error("`{command}` expects {expected}, got `{value}`")]
    InvalidArgument {
        /// Command keyword.
        command: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
        /// Rejected input.
        value: String,
    },
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  search [text]   filter users by name (no text clears the filter)
  page <n>        go to page n
  next | prev     move one page forward or back
  name <text>     set the new user's name
  email <text>    set the new user's email
  submit          add the new user
  delete <id>     delete a user
  refresh         refresh the list
  dismiss         close the notification
  help            show this list
  quit            leave the dashboard";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "search" => Ok(Self::Search(argument.to_owned())),
            "page" => parse_page(argument).map(Self::Page),
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "name" => Ok(Self::Name(argument.to_owned())),
            "email" => Ok(Self::Email(argument.to_owned())),
            "submit" | "add" => Ok(Self::Submit),
            "delete" => parse_user_id(argument).map(Self::Delete),
            "refresh" => Ok(Self::Refresh),
            "dismiss" => Ok(Self::Dismiss),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(keyword.to_owned())),
        }
    }
}

fn parse_page(argument: &str) -> Result<usize, CommandError> {
    const EXPECTED: &str = "a page number";
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "page",
            expected: EXPECTED,
        });
    }
    argument
        .parse()
        .map_err(|_| CommandError::InvalidArgument {
            command: "page",
            expected: EXPECTED,
            value: argument.to_owned(),
        })
}

fn parse_user_id(argument: &str) -> Result<UserId, CommandError> {
    const EXPECTED: &str = "a numeric user id";
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "delete",
            expected: EXPECTED,
        });
    }
    argument
        .parse()
        .map_err(|_| CommandError::InvalidArgument {
            command: "delete",
            expected: EXPECTED,
            value: argument.to_owned(),
        })
}
