use crate::events::LoanEvent;

/// Trait for loan lifecycle observation
pub trait LoanObserver {
    /// Called after every successful checkout, renewal, or return
    fn on_loan_event(&self, call_number: &str, event: &LoanEvent);
}

/// Logs all loan transitions that occur in the catalog
#[derive(Debug)]
pub struct TransitionLogger;

impl LoanObserver for TransitionLogger {
    fn on_loan_event(&self, call_number: &str, event: &LoanEvent) {
        match event {
            LoanEvent::CheckedOut { email } => {
                tracing::info!(call_number, email, "book checked out");
            }
            LoanEvent::Renewed => {
                tracing::info!(call_number, "loan renewed");
            }
            LoanEvent::Returned => {
                tracing::info!(call_number, "book returned");
            }
        }
    }
}
