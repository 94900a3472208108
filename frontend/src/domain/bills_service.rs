//! Bill list page service.

use log::info;
use shared::{Bill, SessionUser};
use std::sync::Arc;

use crate::navigation::{Navigator, Route};
use crate::services::format::{format_date, format_status};
use crate::store::{BillStore, StoreError};
use crate::view::ReceiptPreview;

/// Backs the bills list page: fetches and formats the collection and wires
/// the list-level interactions.
pub struct BillsService<S: BillStore> {
    store: Arc<S>,
    session: SessionUser,
    navigator: Arc<dyn Navigator>,
    preview: Arc<dyn ReceiptPreview>,
}

impl<S: BillStore> BillsService<S> {
    pub fn new(
        store: Arc<S>,
        session: SessionUser,
        navigator: Arc<dyn Navigator>,
        preview: Arc<dyn ReceiptPreview>,
    ) -> Self {
        Self {
            store,
            session,
            navigator,
            preview,
        }
    }

    /// The injected session user, read-only, for the page chrome.
    pub fn session(&self) -> &SessionUser {
        &self.session
    }

    /// Fetch the full collection and derive the display fields in place.
    ///
    /// Store order is preserved; ordering for display belongs to the view
    /// layer (`view::bill_rows`). A rejection is surfaced as-is and never
    /// retried.
    pub async fn get_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let bills = self.store.list().await?;
        info!("length {}", bills.len());
        Ok(bills.into_iter().map(with_display_fields).collect())
    }

    /// The "new bill" button.
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// The eye icon of a list row. A row without an attached receipt is a
    /// deliberate no-op.
    pub fn handle_click_icon_eye(&self, file_url: Option<&str>) {
        if let Some(url) = file_url {
            self.preview.show(url);
        }
    }
}

fn with_display_fields(mut bill: Bill) -> Bill {
    bill.date = format_date(&bill.date);
    bill.status = format_status(&bill.status);
    bill
}
