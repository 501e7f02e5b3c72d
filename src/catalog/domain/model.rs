use std::collections::HashMap;
use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog owns every book of the library. Books live once in `books` and the genre
// index only keeps their positions, so the genre view and the full traversal can
// never disagree about a book's state.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<BookEntity>,
    genres: HashMap<String, Vec<usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: BookEntity) {
        let ndx = self.books.len();
        self.genres.entry(book.genre().to_string()).or_default().push(ndx);
        debug!(title = book.title(), genre = book.genre(), "book added to catalog");
        self.books.push(book);
    }

    /// Available books of `genre` in insertion order. Availability is checked as
    /// the iterator advances; an unknown genre gives an empty view.
    pub fn genre_view(&self, genre: &str) -> AvailableBooks<'_> {
        let positions = self.genres.get(genre).map(Vec::as_slice).unwrap_or(&[]);
        AvailableBooks {
            books: &self.books,
            positions,
            cursor: 0,
        }
    }

    pub fn find_by_title(&self, title: &str) -> LibraryResult<&BookEntity> {
        let ndx = self.position_of(title)?;
        Ok(&self.books[ndx])
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> LibraryResult<&mut BookEntity> {
        let ndx = self.position_of(title)?;
        Ok(&mut self.books[ndx])
    }

    /// Every book, genre bucket by genre bucket. The order between genres follows
    /// the index and is not stable across runs.
    pub fn all_books(&self) -> impl Iterator<Item = &BookEntity> + '_ {
        self.genres.values().flatten().map(move |&ndx| &self.books[ndx])
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> + '_ {
        self.genres.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // first case-insensitive match, scanning the genre buckets
    fn position_of(&self, title: &str) -> LibraryResult<usize> {
        self.genres.values()
            .flatten()
            .copied()
            .find(|&ndx| self.books[ndx].matches_title(title))
            .ok_or_else(|| LibraryError::book_not_found(title))
    }
}

// AvailableBooks is a single-pass view over one genre bucket that skips checked out books.
#[derive(Debug, Clone)]
pub struct AvailableBooks<'a> {
    books: &'a [BookEntity],
    positions: &'a [usize],
    cursor: usize,
}

impl<'a> Iterator for AvailableBooks<'a> {
    type Item = &'a BookEntity;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&ndx) = self.positions.get(self.cursor) {
            self.cursor += 1;
            let book = &self.books[ndx];
            if book.is_available() {
                return Some(book);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.positions.len() - self.cursor))
    }
}
