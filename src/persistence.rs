use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{book::Book, borrower::Borrower, loan::Loan};

/// Serializable snapshot of the full catalog state.
///
/// Observers are deliberately not part of a snapshot; they need to be
/// re-registered after a catalog is rebuilt from one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSnapshot {
    /// Books keyed by call number
    pub books: BTreeMap<String, Book>,
    /// Borrowers keyed by email
    pub borrowers: BTreeMap<String, Borrower>,
    /// Active loans keyed by call number
    pub loans: BTreeMap<String, Loan>,
}
