//! Parsing of input lines into commands.
//!
//! Lines starting with `.` are meta-commands, which drive the interpreter
//! itself. Everything else is a statement against the table, keyed by its
//! first whitespace-separated word.

use crate::{Error, Result, Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Constants,
}

impl MetaCommand {
    fn parse(input: &str) -> Result<MetaCommand> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            ".constants" => Ok(MetaCommand::Constants),
            _ => Err(Error::UnrecognizedCommand(input.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    fn parse(input: &str) -> Result<Statement> {
        let mut tokens = input.split_whitespace();
        match tokens.next() {
            Some("insert") => Self::parse_insert(tokens),
            Some("select") => match tokens.next() {
                None => Ok(Statement::Select),
                Some(_) => Err(Error::Syntax),
            },
            _ => Err(Error::UnrecognizedKeyword(input.to_string())),
        }
    }

    fn parse_insert<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Statement> {
        let args: Vec<&str> = tokens.collect();
        let [id, username, email] = args[..] else {
            return Err(Error::Syntax);
        };

        let id: i64 = id.parse().map_err(|_| Error::Syntax)?;
        if id < 0 {
            return Err(Error::NegativeId);
        }
        let id = u32::try_from(id).map_err(|_| Error::Syntax)?;

        Ok(Statement::Insert(Row::new(id, username, email)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Meta(MetaCommand),
    Statement(Statement),
}

impl Command {
    /// Classifies one line of input. Malformed and unrecognized lines come
    /// back as the error that should be reported for them.
    pub fn parse(line: &str) -> Result<Command> {
        let input = line.trim();
        if input.starts_with('.') {
            MetaCommand::parse(input).map(Command::Meta)
        } else {
            Statement::parse(input).map(Command::Statement)
        }
    }
}
