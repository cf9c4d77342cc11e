use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    book::Book, borrower::Borrower, events::LoanEvent, loan::Loan, observers::LoanObserver,
    persistence::CatalogSnapshot,
};

/// Custom error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A book with this call number is already in the catalog
    #[error("Duplicate call number: {0}")]
    DuplicateCallNumber(String),
    /// A borrower with this email is already registered
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),
    /// Error occurred while saving state
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// Error occurred while loading state
    #[error("Load error: {0}")]
    Load(String),
}

/// In-memory library catalog: books, borrowers, and active loans
pub struct LibraryCatalog {
    /// Books keyed by call number, ascending
    books: BTreeMap<String, Book>,
    /// Borrowers keyed by email, ascending
    borrowers: BTreeMap<String, Borrower>,
    /// Active loans keyed by call number; no entry means not checked out
    loans: BTreeMap<String, Loan>,
    /// Registered loan lifecycle observers
    observers: Vec<Box<dyn LoanObserver>>,
}

// Manual implementation of Debug, since observers are trait objects
impl fmt::Debug for LibraryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryCatalog")
            .field("books", &self.books)
            .field("borrowers", &self.borrowers)
            .field("loans", &self.loans)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl LibraryCatalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            borrowers: BTreeMap::new(),
            loans: BTreeMap::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of loan transitions
    pub fn register_observer(&mut self, observer: Box<dyn LoanObserver>) {
        self.observers.push(observer);
    }

    /// Add a book to the catalog
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError::DuplicateCallNumber` if a book with the
    /// same call number is already in the catalog
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        call_number: &str,
    ) -> Result<(), CatalogError> {
        if self.books.contains_key(call_number) {
            return Err(CatalogError::DuplicateCallNumber(call_number.to_string()));
        }
        self.books.insert(call_number.to_string(), Book::new(title, author, call_number));
        Ok(())
    }

    /// Register a borrower
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError::DuplicateEmail` if a borrower with the
    /// same email is already registered
    pub fn add_borrower(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<(), CatalogError> {
        if self.borrowers.contains_key(email) {
            return Err(CatalogError::DuplicateEmail(email.to_string()));
        }
        self.borrowers.insert(email.to_string(), Borrower::new(first_name, last_name, email, phone));
        Ok(())
    }

    /// Get all call numbers in ascending lexicographic order
    #[must_use]
    pub fn get_call_numbers(&self) -> Vec<&str> {
        self.books.keys().map(String::as_str).collect()
    }

    /// Get all borrower emails in ascending lexicographic order
    #[must_use]
    pub fn get_emails(&self) -> Vec<&str> {
        self.borrowers.keys().map(String::as_str).collect()
    }

    /// Render all books as CSV, one quoted line per book in ascending
    /// call-number order
    #[must_use]
    pub fn get_book_csv(&self) -> String {
        let mut csv = String::new();
        for book in self.books.values() {
            csv.push_str(&csv_line(&[&book.title, &book.author, &book.call_number]));
        }
        csv
    }

    /// Render all borrowers as CSV, one quoted line per borrower in
    /// ascending email order
    #[must_use]
    pub fn get_borrower_csv(&self) -> String {
        let mut csv = String::new();
        for borrower in self.borrowers.values() {
            csv.push_str(&csv_line(&[
                &borrower.first_name,
                &borrower.last_name,
                &borrower.email,
                &borrower.phone,
            ]));
        }
        csv
    }

    /// Check a book out to a borrower, due one loan period from today.
    ///
    /// Returns true on success. Returns false, leaving all state unchanged,
    /// if the call number is unknown, the email is unknown, or the book is
    /// already checked out.
    pub fn checkout(&mut self, call_number: &str, email: &str) -> bool {
        if !self.books.contains_key(call_number)
            || !self.borrowers.contains_key(email)
            || self.loans.contains_key(call_number)
        {
            tracing::debug!(call_number, email, "checkout rejected");
            return false;
        }
        self.loans.insert(call_number.to_string(), Loan::begin(email));
        self.notify(call_number, &LoanEvent::CheckedOut { email: email.to_string() });
        true
    }

    /// Return a checked-out book, removing its loan.
    ///
    /// Returns false if no active loan exists for the call number.
    pub fn return_book(&mut self, call_number: &str) -> bool {
        if self.loans.remove(call_number).is_some() {
            self.notify(call_number, &LoanEvent::Returned);
            true
        } else {
            tracing::debug!(call_number, "return rejected: not checked out");
            false
        }
    }

    /// Whether an active loan exists for the call number
    #[must_use]
    pub fn is_checked_out(&self, call_number: &str) -> bool {
        self.loans.contains_key(call_number)
    }

    /// The due date of the active loan for the call number, if any
    #[must_use]
    pub fn get_due_date(&self, call_number: &str) -> Option<NaiveDate> {
        self.loans.get(call_number).map(|loan| loan.due_date)
    }

    /// Renew the active loan for the call number, extending the due date by
    /// one loan period.
    ///
    /// Each loan can be renewed at most once. Returns false, leaving the
    /// loan unchanged, if no active loan exists or the renewal has already
    /// been used.
    pub fn renew(&mut self, call_number: &str) -> bool {
        let Some(loan) = self.loans.get_mut(call_number) else {
            tracing::debug!(call_number, "renewal rejected: not checked out");
            return false;
        };
        if loan.renew() {
            self.notify(call_number, &LoanEvent::Renewed);
            true
        } else {
            tracing::debug!(call_number, "renewal rejected: already renewed");
            false
        }
    }

    /// Capture a serializable snapshot of the current catalog state
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            books: self.books.clone(),
            borrowers: self.borrowers.clone(),
            loans: self.loans.clone(),
        }
    }

    /// Rebuild a catalog from a snapshot. Observers are not part of a
    /// snapshot and need to be re-registered by the caller.
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            books: snapshot.books,
            borrowers: snapshot.borrowers,
            loans: snapshot.loans,
            observers: Vec::new(),
        }
    }

    /// Save the catalog state to a JSON file, creating or overwriting it
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError::Persistence` if:
    /// - The state cannot be serialized to JSON
    /// - The file cannot be created
    /// - The data cannot be written to the file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        let serialized = serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CatalogError::Persistence(e.to_string()))?;

        let mut file = File::create(path)
            .map_err(|e| CatalogError::Persistence(format!("Failed to create file: {e}")))?;

        file.write_all(serialized.as_bytes())
            .map_err(|e| CatalogError::Persistence(format!("Failed to write to file: {e}")))?;

        Ok(())
    }

    /// Load a catalog from a JSON file previously written by
    /// [`write_to_file`](Self::write_to_file).
    ///
    /// Returns a new catalog value; the caller decides whether it replaces
    /// an existing one.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError::Load` if:
    /// - The file does not exist or cannot be opened
    /// - The file cannot be read
    /// - The JSON parsing fails
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::Load(format!("File does not exist: {}", path.display())));
        }

        let mut file = File::open(path)
            .map_err(|e| CatalogError::Load(format!("Failed to open file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CatalogError::Load(format!("Failed to read file: {e}")))?;

        let snapshot: CatalogSnapshot = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Load(format!("Failed to parse JSON: {e}")))?;

        Ok(Self::from_snapshot(snapshot))
    }

    /// Notify all registered observers of a loan transition
    fn notify(&self, call_number: &str, event: &LoanEvent) {
        for observer in &self.observers {
            observer.on_loan_event(call_number, event);
        }
    }
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// Implementing display for nicer output
impl fmt::Display for LibraryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} books, {} borrowers, {} checked out",
            self.books.len(),
            self.borrowers.len(),
            self.loans.len()
        )
    }
}

/// Render one CSV record: each field double-quoted with embedded quotes
/// doubled, fields comma-separated, line newline-terminated
fn csv_line(fields: &[&str]) -> String {
    let quoted: Vec<String> =
        fields.iter().map(|field| format!("\"{}\"", field.replace('"', "\"\""))).collect();
    format!("{}\n", quoted.join(","))
}
