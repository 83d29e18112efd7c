use std::str::FromStr;

use roster::{consts::consts::PersonId, view::form::Field};
use thiserror::Error;

/// One line of console input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    /// Empty text clears the filter
    Search(String),
    Reload,
    Show(PersonId),
    Add,
    Edit(PersonId),
    Set(Field, String),
    Save,
    Cancel,
    Delete(PersonId),
    Answer(bool),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs a person id")]
    MissingId(&'static str),
    #[error("Not a person id: {0}")]
    InvalidId(String),
    #[error("Usage: set <first|last|email|age> <value>")]
    InvalidSet,
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

fn parse_id(command: &'static str, rest: &str) -> Result<PersonId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingId(command));
    }

    PersonId::from_str(rest).map_err(|_| CommandError::InvalidId(rest.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "l" | "ls" | "list" => Command::List,
            "search" | "/" => Command::Search(rest.to_string()),
            "r" | "reload" => Command::Reload,
            "show" => Command::Show(parse_id("show", rest)?),
            "a" | "add" => Command::Add,
            "e" | "edit" => Command::Edit(parse_id("edit", rest)?),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None if !rest.is_empty() => (rest, ""),
                    None => return Err(CommandError::InvalidSet),
                };

                let field = Field::from_str(field)
                    .map_err(|_| CommandError::UnknownField(field.to_string()))?;

                Command::Set(field, value.to_string())
            }
            "s" | "save" => Command::Save,
            "c" | "cancel" => Command::Cancel,
            "d" | "delete" => Command::Delete(parse_id("delete", rest)?),
            "y" | "yes" => Command::Answer(true),
            "n" | "no" => Command::Answer(false),
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  list                     show the table
  search [text]            filter by name or email, empty clears
  reload                   fetch everyone again
  show <id>                fetch a single person
  add                      open the add dialog
  edit <id>                open the edit dialog
  set <field> <value>      fill a dialog field (first, last, email, age)
  save | cancel            submit or close the dialog
  delete <id>              delete, asks for confirmation
  yes | no                 answer the confirmation
  quit";
