use thiserror::Error;

use crate::command::Command;
use crate::model::task::Task;

/// What went wrong with a line of user input. The `Display` text is
/// shown to the user verbatim, so it is phrased as a complaint, not a
/// diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("I don't know what '{0}' means.")]
    UnknownCommand(String),
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),
    #[error("A deadline needs '/by' followed by a time.")]
    MissingBy,
    #[error("An event needs '/from' and '/to', each followed by a time.")]
    MissingFromTo,
    #[error("'{0}' is not a task number.")]
    NotANumber(String),
    #[error("The '{0}' command needs a task number.")]
    MissingTaskNumber(&'static str),
    #[error("Tell me a keyword to search for.")]
    MissingKeyword,
}

/// Parses one line of raw input into a command. Fixed vocabulary:
/// `todo`, `deadline … /by …`, `event … /from … /to …`, `done <n>`,
/// `delete <n>`, `find <keyword>`, `list`, `bye`.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "list" => Ok(Command::List),
        "bye" => Ok(Command::Exit),
        "done" => Ok(Command::MarkDone(parse_task_number("done", rest)?)),
        "delete" => Ok(Command::Delete(parse_task_number("delete", rest)?)),
        "find" => {
            if rest.is_empty() {
                return Err(ParseError::MissingKeyword);
            }
            Ok(Command::Find(rest.to_string()))
        }
        "todo" => {
            if rest.is_empty() {
                return Err(ParseError::EmptyDescription("todo"));
            }
            Ok(Command::Add(Task::todo(rest.to_string())))
        }
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_task_number(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingTaskNumber(command));
    }
    rest.parse()
        .map_err(|_| ParseError::NotANumber(rest.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, ParseError> {
    let (description, by) = rest.split_once("/by").ok_or(ParseError::MissingBy)?;
    let description = description.trim();
    let by = by.trim();

    if description.is_empty() {
        return Err(ParseError::EmptyDescription("deadline"));
    }
    if by.is_empty() {
        return Err(ParseError::MissingBy);
    }
    Ok(Command::Add(Task::deadline(
        description.to_string(),
        by.to_string(),
    )))
}

fn parse_event(rest: &str) -> Result<Command, ParseError> {
    let (description, times) = rest.split_once("/from").ok_or(ParseError::MissingFromTo)?;
    let (from, to) = times.split_once("/to").ok_or(ParseError::MissingFromTo)?;
    let description = description.trim();
    let from = from.trim();
    let to = to.trim();

    if description.is_empty() {
        return Err(ParseError::EmptyDescription("event"));
    }
    if from.is_empty() || to.is_empty() {
        return Err(ParseError::MissingFromTo);
    }
    Ok(Command::Add(Task::event(
        description.to_string(),
        from.to_string(),
        to.to_string(),
    )))
}
