use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;
use crate::books::domain::Book;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity abstracts a single catalog entry. Only the availability flag changes
// after construction, and only through checkout or return.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    title: String,
    author: String,
    genre: String,
    available: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            available: true,
        }
    }

    pub fn checkout(&mut self) -> LibraryResult<()> {
        if !self.available {
            return Err(LibraryError::already_checked_out(self.title.as_str()));
        }
        self.available = false;
        debug!(title = %self.title, "book checked out");
        Ok(())
    }

    /// Administrative override: marks the book checked out without looking at
    /// its current availability.
    pub fn force_checkout(&mut self) {
        self.available = false;
        debug!(title = %self.title, "book force checked out");
    }

    pub fn return_book(&mut self) {
        self.available = true;
        debug!(title = %self.title, "book returned");
    }

    pub(crate) fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn status(&self) -> BookStatus {
        if self.available { BookStatus::Available } else { BookStatus::CheckedOut }
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_build_available_book() {
        let book = BookEntity::new("title", "author", "genre");
        assert_eq!("title", book.title());
        assert_eq!("author", book.author());
        assert_eq!("genre", book.genre());
        assert!(book.is_available());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[test]
    fn test_should_reject_second_checkout() {
        let mut book = BookEntity::new("How to code", "Kai Johnson", "Fiction");
        book.checkout().expect("first checkout");
        let res = book.checkout();
        assert!(matches!(res, Err(LibraryError::AlreadyCheckedOut { .. })));
        assert!(!book.is_available());
    }

    #[test]
    fn test_should_checkout_again_after_return() {
        let mut book = BookEntity::new("How to code", "Kai Johnson", "Fiction");
        book.checkout().expect("checkout");
        book.return_book();
        assert!(book.is_available());
        book.checkout().expect("checkout after return");
        assert!(!book.is_available());
    }

    #[test]
    fn test_should_force_checkout_regardless_of_state() {
        let mut book = BookEntity::new("title", "author", "genre");
        book.force_checkout();
        assert!(!book.is_available());
        book.force_checkout();
        assert_eq!(BookStatus::CheckedOut, book.status());
    }

    #[test]
    fn test_should_ignore_return_of_available_book() {
        let mut book = BookEntity::new("title", "author", "genre");
        book.return_book();
        assert!(book.is_available());
    }

    #[test]
    fn test_should_describe_book() {
        let mut book = BookEntity::new("Musicals", "Alex Hamilton", "Non-Fiction");
        assert_eq!("\"Musicals\" by Alex Hamilton (Non-Fiction) [Available]", book.describe());
        book.checkout().expect("checkout");
        assert_eq!("\"Musicals\" by Alex Hamilton (Non-Fiction) [Checked Out]", book.to_string());
    }

    #[test]
    fn test_should_match_title_ignoring_case() {
        let book = BookEntity::new("How To Code", "author", "genre");
        assert!(book.matches_title("how to code"));
        assert!(book.matches_title("HOW TO CODE"));
        assert!(!book.matches_title("how to"));
    }
}
