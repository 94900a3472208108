//! Typed snapshots handed to the page services by the host UI.
//!
//! The services never query rendered markup by selector; the host UI reads
//! its own widgets and passes one of these instead.

/// Snapshot of the new-bill form at submit time.
///
/// Required-field presence is enforced by the rendered form; the service
/// trusts the snapshot as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitBillCommand {
    /// Expense category, one of `shared::EXPENSE_TYPES`.
    pub expense_type: String,
    pub name: String,
    /// Raw `YYYY-MM-DD` string from the date picker.
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    /// Reimbursement percentage; `None` when the field was left empty.
    pub pct: Option<f64>,
    pub commentary: String,
}
