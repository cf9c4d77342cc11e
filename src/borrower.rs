use serde::{Deserialize, Serialize};

/// A registered library patron who can borrow books
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Borrower {
    /// First name of the borrower
    pub first_name: String,
    /// Last name of the borrower
    pub last_name: String,
    /// Unique email identifying the borrower
    pub email: String,
    /// Contact phone number
    pub phone: String,
}

impl Borrower {
    /// Create a new borrower record
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, phone: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}
