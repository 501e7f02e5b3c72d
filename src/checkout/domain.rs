use crate::books::dto::BookDto;
use crate::catalog::domain::model::Catalog;
use crate::core::library::LibraryResult;
use crate::patrons::domain::model::Patron;

pub mod policy;
pub mod service;

pub trait CheckoutService {
    fn checkout(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn returned(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn available_in_genre(&self, genre: &str) -> Vec<BookDto>;
    fn catalog(&self) -> &Catalog;
    fn patron(&self) -> &Patron;
}
