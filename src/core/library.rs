use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // No book in any genre matched the requested title.
    BookNotFound {
        message: String,
    },
    // Checkout was attempted on a book whose availability flag is already false.
    AlreadyCheckedOut {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn book_not_found(title: &str) -> LibraryError {
        LibraryError::BookNotFound { message: format!("Book titled \"{}\" not found.", title) }
    }

    pub fn already_checked_out(title: &str) -> LibraryError {
        LibraryError::AlreadyCheckedOut { message: format!("The book \"{}\" is already checked out.", title) }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyCheckedOut { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    CheckedOut,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::CheckedOut => write!(f, "Checked Out"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum PatronTier {
    Regular,
    Premium,
}

impl PatronTier {
    // answer to the startup question "Are you a premium user?"
    pub fn from_answer(answer: &str) -> PatronTier {
        if answer.trim().eq_ignore_ascii_case("yes") {
            PatronTier::Premium
        } else {
            PatronTier::Regular
        }
    }
}

impl Display for PatronTier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatronTier::Regular => write!(f, "Regular"),
            PatronTier::Premium => write!(f, "Premium"),
        }
    }
}
