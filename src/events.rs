use serde::{Deserialize, Serialize};

/// Loan lifecycle transitions reported to observers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum LoanEvent {
    /// A book was checked out to a borrower
    CheckedOut {
        /// Email of the borrower taking the book
        email: String,
    },
    /// An active loan used its one permitted renewal
    Renewed,
    /// A checked-out book came back
    Returned,
}
