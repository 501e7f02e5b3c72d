use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::model::Catalog;
use crate::checkout::domain::CheckoutService;
use crate::core::library::LibraryResult;
use crate::patrons::domain::model::Patron;

pub struct CheckoutServiceImpl {
    catalog: Catalog,
    patron: Patron,
}

impl CheckoutServiceImpl {
    pub fn new(catalog: Catalog, patron: Patron) -> Self {
        Self {
            catalog,
            patron,
        }
    }
}

impl CheckoutService for CheckoutServiceImpl {
    fn checkout(&mut self, title: &str) -> LibraryResult<BookDto> {
        let book = self.catalog.find_by_title_mut(title)?;
        if let Err(err) = self.patron.borrow(book) {
            debug!(title, error = %err, "checkout rejected");
            return Err(err);
        }
        let book = BookDto::from(&*book);
        info!(title = book.title(), patron = self.patron.name(), tier = %self.patron.tier(), "book checked out");
        Ok(book)
    }

    fn returned(&mut self, title: &str) -> LibraryResult<BookDto> {
        let book = self.catalog.find_by_title_mut(title)?;
        self.patron.return_book(book);
        let book = BookDto::from(&*book);
        info!(title = book.title(), patron = self.patron.name(), "book returned");
        Ok(book)
    }

    fn available_in_genre(&self, genre: &str) -> Vec<BookDto> {
        self.catalog.genre_view(genre).map(BookDto::from).collect()
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn patron(&self) -> &Patron {
        &self.patron
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::books::domain::Book;
    use crate::catalog::factory::create_catalog;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError, PatronTier};
    use crate::patrons::factory::create_patron;

    pub(crate) fn build_service(tier: PatronTier) -> CheckoutServiceImpl {
        let config = Configuration::new("test");
        CheckoutServiceImpl::new(create_catalog(&config), create_patron("tester", tier))
    }

    #[test]
    fn test_should_checkout_and_return() {
        let mut svc = build_service(PatronTier::Regular);
        let book = svc.checkout("how to code").expect("should checkout");
        assert_eq!("How to code", book.title());
        assert_eq!(BookStatus::CheckedOut, book.book_status);

        let book = svc.returned("How to code").expect("should return");
        assert_eq!(BookStatus::Available, book.book_status);
        assert!(svc.catalog().find_by_title("How to code").expect("find").is_available());
    }

    #[test]
    fn test_should_report_every_applied_change_as_success() {
        for tier in [PatronTier::Regular, PatronTier::Premium] {
            let mut svc = build_service(tier);
            let book = svc.checkout("Musicals").expect("checkout should succeed once applied");
            let stored = svc.catalog().find_by_title("Musicals").expect("find");
            assert_eq!(stored.status(), book.book_status);
            assert_eq!(stored.describe(), book.describe());

            let book = svc.returned("Musicals").expect("return should succeed once applied");
            let stored = svc.catalog().find_by_title("Musicals").expect("find");
            assert_eq!(BookStatus::Available, stored.status());
            assert_eq!(stored.status(), book.book_status);
        }
    }

    #[test]
    fn test_should_reject_double_checkout() {
        let mut svc = build_service(PatronTier::Premium);
        let _ = svc.checkout("How to code").expect("should checkout");
        let res = svc.checkout("How to code");
        assert!(matches!(res, Err(LibraryError::AlreadyCheckedOut { .. })));
        let book = svc.catalog().find_by_title("How to code").expect("find");
        assert_eq!(BookStatus::CheckedOut, book.status());
    }

    #[test]
    fn test_should_not_find_unknown_title() {
        let mut svc = build_service(PatronTier::Regular);
        let res = svc.checkout("Nonexistent Book");
        assert!(matches!(res, Err(LibraryError::BookNotFound { .. })));
        let res = svc.returned("Nonexistent Book");
        assert!(matches!(res, Err(LibraryError::BookNotFound { .. })));
        assert!(svc.catalog().all_books().all(|b| b.is_available()));
    }

    #[test]
    fn test_should_list_available_in_genre() {
        let mut svc = build_service(PatronTier::Regular);
        let titles: Vec<_> = svc.available_in_genre("Non-Fiction").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["Musicals", "How to be a surfer"], titles);
        let _ = svc.checkout("Musicals").expect("should checkout");
        let titles: Vec<_> = svc.available_in_genre("Non-Fiction").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["How to be a surfer"], titles);
        assert!(svc.available_in_genre("Romance").is_empty());
    }

    #[test]
    fn test_should_expose_patron() {
        let svc = build_service(PatronTier::Premium);
        assert_eq!("tester", svc.patron().name());
        assert_eq!(PatronTier::Premium, svc.patron().tier());
    }
}
