use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of a loan period, in days. A renewal extends the due date by the
/// same amount.
pub const LOAN_PERIOD_DAYS: u64 = 28;

/// An active loan linking a checked-out book to a borrower
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Loan {
    /// Email of the borrower holding the book
    pub email: String,
    /// Date the book is due back
    pub due_date: NaiveDate,
    /// Whether the one permitted renewal has been used
    pub renewed: bool,
}

impl Loan {
    /// Start a loan for the given borrower, due one loan period from today
    #[must_use]
    pub fn begin(email: &str) -> Self {
        let today = Local::now().date_naive();
        Self { email: email.to_string(), due_date: extend(today), renewed: false }
    }

    /// Use the one permitted renewal, pushing the due date out by another
    /// loan period. Returns false and changes nothing if the renewal has
    /// already been used.
    pub fn renew(&mut self) -> bool {
        if self.renewed {
            return false;
        }
        self.due_date = extend(self.due_date);
        self.renewed = true;
        true
    }
}

/// The date one loan period after `from`. Calendar overflow cannot occur
/// for real dates; the input is returned unchanged in that case.
fn extend(from: NaiveDate) -> NaiveDate {
    from.checked_add_days(Days::new(LOAN_PERIOD_DAYS)).unwrap_or(from)
}
