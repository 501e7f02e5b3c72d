use std::fmt::Debug;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PatronTier};

// CheckoutPolicy decides whether a patron may take a book home. Successful
// evaluation leaves the book checked out.
pub trait CheckoutPolicy: Debug {
    fn evaluate(&self, book: &mut BookEntity) -> LibraryResult<()>;
    fn tier(&self) -> PatronTier;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardPolicy;

impl CheckoutPolicy for StandardPolicy {
    fn evaluate(&self, book: &mut BookEntity) -> LibraryResult<()> {
        book.checkout()
    }

    fn tier(&self) -> PatronTier {
        PatronTier::Regular
    }
}

// Premium members get the same availability check for now; loan perks go here.
#[derive(Debug, Default, Clone, Copy)]
pub struct PremiumPolicy;

impl CheckoutPolicy for PremiumPolicy {
    fn evaluate(&self, book: &mut BookEntity) -> LibraryResult<()> {
        book.checkout()
    }

    fn tier(&self) -> PatronTier {
        PatronTier::Premium
    }
}
