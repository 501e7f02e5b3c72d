use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;

// BookDto is a point-in-time copy of a catalog entry handed out by the checkout service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub book_status: BookStatus,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            genre: other.genre().to_string(),
            book_status: other.status(),
        }
    }
}

impl Book for BookDto {
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
        self.book_status
    }
}
