use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    // user-facing commands errors are printed and the menu loop goes on
    pub fn recoverable(&self) -> bool {
        matches!(self, CommandError::NotFound { .. } | CommandError::Unavailable { .. })
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyCheckedOut { message } => {
                CommandError::Unavailable { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl From<CommandError> for LibraryError {
    fn from(other: CommandError) -> Self {
        match other {
            CommandError::NotFound { message } => {
                LibraryError::BookNotFound { message }
            }
            CommandError::Unavailable { message } => {
                LibraryError::AlreadyCheckedOut { message }
            }
            CommandError::Runtime { message, reason_code } => {
                LibraryError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::Unavailable { message } => write!(f, "{}", message),
            CommandError::Runtime { message, reason_code } => write!(f, "{} {:?}", message, reason_code),
        }
    }
}

impl std::error::Error for CommandError {}
