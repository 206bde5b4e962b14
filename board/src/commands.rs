//! Line commands typed at the board prompt.

use thiserror::Error;

pub const HELP: &str = "\
commands:
  compose <text>   fill the compose field
  post             submit the compose field
  edit <id>        start editing a post
  text <text>      replace the text of the post being edited
  save             save the post being edited
  cancel           leave edit mode without saving
  delete <id>      delete a post (asks first)
  refresh          reload the list
  help             show this help
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Compose(String),
    Post,
    Edit(String),
    Text(String),
    Save,
    Cancel,
    Delete(String),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` takes no argument")]
    UnexpectedArgument(&'static str),
}

impl Command {
    /// Commands that issue a request and therefore wait for `loading` to drop.
    pub fn needs_idle(&self) -> bool {
        matches!(
            self,
            Command::Post | Command::Save | Command::Delete(_) | Command::Refresh | Command::Edit(_)
        )
    }
}

/// Parse one input line. Text arguments keep their inner whitespace; only the
/// separator after the keyword is dropped.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let text = |name: &'static str| {
        if rest.trim().is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };
    let id = |name: &'static str| {
        let id = rest.trim();
        if id.is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(id.to_string())
        }
    };
    let bare = |name: &'static str, command: Command| {
        if rest.trim().is_empty() {
            Ok(command)
        } else {
            Err(ParseError::UnexpectedArgument(name))
        }
    };

    match word {
        // An empty compose field is legal; `post` then does nothing.
        "compose" => Ok(Command::Compose(rest.to_string())),
        "post" => bare("post", Command::Post),
        "edit" => id("edit").map(Command::Edit),
        "text" => text("text").map(Command::Text),
        "save" => bare("save", Command::Save),
        "cancel" => bare("cancel", Command::Cancel),
        "delete" => id("delete").map(Command::Delete),
        "refresh" | "" => bare("refresh", Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}
