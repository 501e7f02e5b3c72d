//! Console library catalog: a genre-indexed book collection, checkout policies
//! per patron tier and the interactive shell driving them.

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod patrons;
pub mod shell;
pub mod utils;
