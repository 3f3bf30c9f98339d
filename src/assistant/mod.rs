//! The assistant bot: a command-dispatch session around one address book.
//!
//! Input lines are tokenized by [`parse_input`], routed to a handler, and
//! every handler error is turned into an `Error: <message>` reply at this
//! boundary. Nothing here re-implements the rules of the data model.

mod handlers;
mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::{Duration, Local, NaiveDateTime};
use tracing::{debug, warn};

/// The outcome of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands
    Continue(String),

    /// Print the text and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Convert a handler error into the user-facing reply line.
pub fn render_error(err: &CommandError) -> String {
    format!("Error: {}", err)
}

/// Interactive session state.
pub struct Assistant {
    book: AddressBook,
    birthday_window: Duration,
}

impl Assistant {
    /// Create a session with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a session around an existing book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            birthday_window: Duration::days(i64::from(config.birthday_window_days)),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input relative to the current local time.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.handle_line_at(line, Local::now().naive_local())
    }

    /// Handle one line of input, using `now` for birthday queries.
    pub fn handle_line_at(&mut self, line: &str, now: NaiveDateTime) -> Reply {
        let ParsedInput { command, args } = parse_input(line);
        let parsed = Command::from_word(&command);
        debug!(command = %command, args = args.len(), "Dispatching command");

        match self.dispatch(parsed, &args, now) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(command = %command, error = %e, "Command failed");
                Reply::Continue(render_error(&e))
            }
        }
    }

    fn dispatch(
        &mut self,
        command: Command,
        args: &[String],
        now: NaiveDateTime,
    ) -> CommandResult<Reply> {
        let book = &mut self.book;
        let text = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Unknown => "Invalid command.".to_string(),
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => handlers::add_contact(args, book)?,
            Command::Change => handlers::change_phone(args, book)?,
            Command::Phone => handlers::show_phones(args, book)?,
            Command::RemovePhone => handlers::remove_phone(args, book)?,
            Command::Delete => handlers::delete_contact(args, book)?,
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(args, book)?,
            Command::ShowBirthday => handlers::show_birthday(args, book)?,
            Command::Birthdays => handlers::upcoming_birthdays(book, now, self.birthday_window),
            Command::Export => handlers::export(book)?,
        };
        Ok(Reply::Continue(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_render_error() {
        let err = CommandError::Validation(ValidationError::EmptyName);
        assert_eq!(render_error(&err), "Error: The name cannot be empty.");
    }

    #[test]
    fn test_hello_and_exit() {
        let mut assistant = Assistant::new(&Config::default());
        assert_eq!(
            assistant.handle_line("hello"),
            Reply::Continue("How can I help you?".to_string())
        );

        let reply = assistant.handle_line("EXIT");
        assert!(reply.is_exit());
        assert_eq!(reply.text(), "Good bye!");
    }

    #[test]
    fn test_unknown_and_blank_input() {
        let mut assistant = Assistant::new(&Config::default());
        assert_eq!(assistant.handle_line("dance").text(), "Invalid command.");
        assert_eq!(assistant.handle_line("").text(), "Invalid command.");
    }

    #[test]
    fn test_exit_and_unknown_ignore_arguments() {
        let mut assistant = Assistant::new(&Config::default());
        assert_eq!(
            assistant.handle_line("close now please"),
            Reply::Exit("Good bye!".to_string())
        );
        assert_eq!(
            assistant.handle_line("dance John 1234567890"),
            Reply::Continue("Invalid command.".to_string())
        );
        assert!(assistant.book().is_empty());
    }

    #[test]
    fn test_errors_become_replies() {
        let mut assistant = Assistant::new(&Config::default());
        assert_eq!(
            assistant.handle_line("add").text(),
            "Error: Usage: add <name> [phone]"
        );
        assert!(assistant
            .handle_line("add John 12345")
            .text()
            .starts_with("Error: Invalid phone number '12345'"));
        assert!(assistant.book().is_empty());
    }
}
