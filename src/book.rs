use serde::{Deserialize, Serialize};

/// A catalog entry for a single physical book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Unique call number identifying this copy in the catalog
    pub call_number: String,
}

impl Book {
    /// Create a new book record
    #[must_use]
    pub fn new(title: &str, author: &str, call_number: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            call_number: call_number.to_string(),
        }
    }
}
