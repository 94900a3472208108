//! Contracts between the page services and the host UI.
//!
//! The services never touch rendered markup. The host UI implements the
//! small traits below (renderer, alert channel, receipt modal, form event,
//! file input) and exchanges typed values with the services through them.

use serde::Serialize;
use shared::Bill;
use std::cmp::Ordering;

use crate::services::format::{format_date, format_status};
use crate::store::StoreError;

/// What the bills page renderer is asked to draw.
///
/// Exactly one variant is meaningful per render call: the page is loading,
/// failed with a user-facing message, or has a collection to show. `Data`
/// carries the bills in raw stored form; display derivation and ordering
/// happen in [`bill_rows`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewState {
    Loading,
    Error(String),
    Data(Vec<Bill>),
}

impl From<Result<Vec<Bill>, StoreError>> for ViewState {
    /// Collapse a fetch outcome for rendering. The store's message text
    /// ("Erreur 404", "Erreur 500") is passed through verbatim.
    fn from(result: Result<Vec<Bill>, StoreError>) -> Self {
        match result {
            Ok(bills) => ViewState::Data(bills),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }
}

/// Markup-producing renderer for the bills page. External collaborator.
pub trait BillsRenderer {
    fn render(&self, state: &ViewState) -> String;
}

/// One list row, display-formatted, with the raw date the ordering is
/// defined on kept alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRow {
    pub id: String,
    pub name: String,
    pub expense_type: String,
    pub amount: f64,
    /// Raw stored date (`YYYY-MM-DD`).
    pub date: String,
    pub display_date: String,
    pub display_status: String,
    pub file_url: Option<String>,
}

/// Anti-chronological comparator on raw zero-padded ISO date strings.
///
/// String order equals chronological order for that form, so descending
/// `cmp` puts the most recent bill first.
pub fn anti_chronological(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Order a raw collection for display and derive the display fields.
pub fn bill_rows(bills: &[Bill]) -> Vec<BillRow> {
    let mut rows: Vec<BillRow> = bills
        .iter()
        .map(|bill| BillRow {
            id: bill.id.clone(),
            name: bill.name.clone(),
            expense_type: bill.expense_type.clone(),
            amount: bill.amount,
            date: bill.date.clone(),
            display_date: format_date(&bill.date),
            display_status: format_status(&bill.status),
            file_url: bill.file_url.clone(),
        })
        .collect();
    rows.sort_by(|a, b| anti_chronological(&a.date, &b.date));
    rows
}

/// Blocking user-facing alert channel.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Receipt preview modal collaborator.
pub trait ReceiptPreview: Send + Sync {
    fn show(&self, file_url: &str);
}

/// A form submission event. The service must suppress the browser's default
/// submit side effect exactly once per event.
pub trait FormEvent {
    fn prevent_default(&mut self);
}

/// A file picked in the receipt input.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// The receipt file input of the new-bill form.
pub trait FileInput {
    fn selected_file(&self) -> Option<SelectedFile>;
    /// Reset to the empty selection.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::fixture_bills;
    use crate::store::StoreError;

    #[test]
    fn rows_are_ordered_most_recent_first() {
        let rows = bill_rows(&fixture_bills());
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);

        // Strictly descending on the raw date string.
        for pair in dates.windows(2) {
            assert!(pair[0] > pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn rows_carry_display_forms_next_to_the_raw_date() {
        let rows = bill_rows(&fixture_bills());
        let first = &rows[0];
        assert_eq!(first.date, "2004-04-04");
        assert_eq!(first.display_date, "4 Avr. 04");
        assert_eq!(first.display_status, "En attente");
    }

    #[test]
    fn anti_chronological_orders_descending() {
        assert_eq!(anti_chronological("2004-04-04", "2001-01-01"), Ordering::Less);
        assert_eq!(anti_chronological("2001-01-01", "2004-04-04"), Ordering::Greater);
        assert_eq!(anti_chronological("2002-02-02", "2002-02-02"), Ordering::Equal);
    }

    #[test]
    fn fetch_failure_collapses_to_the_verbatim_error_text() {
        let state = ViewState::from(Err(StoreError::Api { status: 404 }));
        assert_eq!(state, ViewState::Error("Erreur 404".to_string()));

        let state = ViewState::from(Err(StoreError::Api { status: 500 }));
        assert_eq!(state, ViewState::Error("Erreur 500".to_string()));
    }

    #[test]
    fn error_state_serializes_with_its_message() {
        let json = serde_json::to_string(&ViewState::Error("Erreur 404".to_string())).unwrap();
        assert!(json.contains("Erreur 404"));
    }

    #[test]
    fn fetch_success_collapses_to_data() {
        let state = ViewState::from(Ok(fixture_bills()));
        match state {
            ViewState::Data(bills) => assert_eq!(bills.len(), 4),
            other => panic!("expected Data, got {:?}", other),
        }
    }
}
