//! Input tokenizing and command recognition.

/// A command understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Export,
    Exit,
    Unknown,
}

impl Command {
    /// Recognize a (lower-cased) command word.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "export" => Self::Export,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased command word, empty for a blank line
    pub command: String,

    /// Remaining tokens, case preserved
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command word and its arguments.
///
/// Only the command word is lower-cased; names and other arguments keep
/// their case so that lookups stay exact.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default().to_lowercase();
    let args = tokens.map(str::to_string).collect();

    ParsedInput { command, args }
}
