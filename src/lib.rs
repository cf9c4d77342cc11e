//! In-memory library catalog: books, borrowers, and the loan lifecycle.
//!
//! This crate provides an ordered catalog of books and borrowers together
//! with a checkout/renew/return loan lifecycle, CSV export of the catalog
//! records, and JSON snapshot persistence.

pub mod book;
pub mod borrower;
pub mod catalog;
pub mod events;
pub mod loan;
pub mod observers;
pub mod persistence;

pub use book::Book;
pub use borrower::Borrower;
pub use catalog::{CatalogError, LibraryCatalog};
pub use events::LoanEvent;
pub use loan::{LOAN_PERIOD_DAYS, Loan};
pub use observers::{LoanObserver, TransitionLogger};
pub use persistence::CatalogSnapshot;
