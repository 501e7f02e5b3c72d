use crate::books::domain::model::BookEntity;
use crate::checkout::domain::policy::CheckoutPolicy;
use crate::core::library::{LibraryResult, PatronTier};

// Patron abstracts the library member of a console session. The checkout policy
// is fixed for the lifetime of the patron.
#[derive(Debug)]
pub struct Patron {
    name: String,
    policy: Box<dyn CheckoutPolicy>,
}

impl Patron {
    pub fn new(name: &str, policy: Box<dyn CheckoutPolicy>) -> Self {
        Self {
            name: name.to_string(),
            policy,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn tier(&self) -> PatronTier {
        self.policy.tier()
    }

    pub fn borrow(&self, book: &mut BookEntity) -> LibraryResult<()> {
        self.policy.evaluate(book)
    }

    // returns skip the policy and are never rejected
    pub fn return_book(&self, book: &mut BookEntity) {
        book.return_book();
    }
}
