use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct BrowseGenreCommand<'a> {
    checkout_service: &'a dyn CheckoutService,
}

impl<'a> BrowseGenreCommand<'a> {
    pub fn new(checkout_service: &'a dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrowseGenreCommandRequest {
    pub genre: String,
}

impl BrowseGenreCommandRequest {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrowseGenreCommandResponse {
    pub genre: String,
    pub books: Vec<BookDto>,
}

impl BrowseGenreCommandResponse {
    pub fn new(genre: String, books: Vec<BookDto>) -> Self {
        Self {
            genre,
            books,
        }
    }
}

impl<'a> Command<BrowseGenreCommandRequest, BrowseGenreCommandResponse> for BrowseGenreCommand<'a> {
    fn execute(&mut self, req: BrowseGenreCommandRequest) -> Result<BrowseGenreCommandResponse, CommandError> {
        let books = self.checkout_service.available_in_genre(req.genre.as_str());
        Ok(BrowseGenreCommandResponse::new(req.genre, books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::browse_genre_cmd::{BrowseGenreCommand, BrowseGenreCommandRequest};
    use crate::checkout::domain::service::tests::build_service;
    use crate::core::command::Command;
    use crate::core::library::PatronTier;

    #[test]
    fn test_should_run_browse_genre() {
        let svc = build_service(PatronTier::Regular);
        let res = BrowseGenreCommand::new(&svc).execute(BrowseGenreCommandRequest::new("Fantasy")).expect("should browse");
        assert_eq!("Fantasy", res.genre.as_str());
        assert_eq!(1, res.books.len());
        assert_eq!("Rats Rats Rats", res.books[0].title.as_str());
    }

    #[test]
    fn test_should_browse_unknown_genre() {
        let svc = build_service(PatronTier::Regular);
        let res = BrowseGenreCommand::new(&svc).execute(BrowseGenreCommandRequest::new("Cooking")).expect("should browse");
        assert!(res.books.is_empty());
    }
}
