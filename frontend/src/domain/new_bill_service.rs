//! New bill page service: receipt staging and submission.

use log::{info, warn};
use shared::{Bill, SessionUser, STATUS_PENDING};
use std::path::Path;
use std::sync::Arc;

use crate::domain::commands::SubmitBillCommand;
use crate::navigation::{Navigator, Route};
use crate::store::{BillStore, ReceiptUpload, StoreError};
use crate::view::{AlertSink, FileInput, FormEvent};

/// Extensions accepted for a receipt file.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Alert raised when a file with any other extension is selected.
pub const INVALID_EXTENSION_MESSAGE: &str =
    "Veuillez sélectionner un fichier avec une extension .jpg, .png ou .jpeg.";

/// Reimbursement percentage applied when the form field is left empty.
const DEFAULT_PCT: f64 = 20.0;

/// Lifecycle of the single in-flight submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// No receipt staged yet.
    Idle,
    /// Receipt uploaded; the record id and file url are reserved.
    FileStaged {
        bill_id: String,
        file_url: String,
        file_name: String,
    },
    /// Persist request in flight.
    Submitting,
    /// The bill is persisted and navigation to the list was requested.
    Created,
    /// The store rejected the staging upload or the submission.
    Failed(String),
}

/// Backs the new-bill page: validates and uploads the receipt, then
/// assembles and submits the record.
pub struct NewBillService<S: BillStore> {
    store: Arc<S>,
    session: SessionUser,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<dyn AlertSink>,
    state: SubmissionState,
}

impl<S: BillStore> NewBillService<S> {
    pub fn new(
        store: Arc<S>,
        session: SessionUser,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            store,
            session,
            navigator,
            alerts,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Receipt input change handler.
    ///
    /// A valid extension starts the upload immediately so the record id and
    /// file url are reserved before the submit handler can run. An invalid
    /// one clears the input and raises one alert, leaving the state as it
    /// was.
    pub async fn handle_change_file(&mut self, input: &mut dyn FileInput) -> Result<(), StoreError> {
        let Some(file) = input.selected_file() else {
            return Ok(());
        };
        if !has_allowed_extension(&file.name) {
            input.clear();
            self.alerts.alert(INVALID_EXTENSION_MESSAGE);
            return Ok(());
        }

        let file_name = file.name.clone();
        let upload = ReceiptUpload {
            file,
            email: self.session.email.clone(),
        };
        match self.store.create(upload).await {
            Ok(response) => {
                info!("receipt staged: key={}", response.key);
                self.state = SubmissionState::FileStaged {
                    bill_id: response.key,
                    file_url: response.file_url,
                    file_name,
                };
                Ok(())
            }
            Err(e) => {
                self.state = SubmissionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Form submit handler.
    ///
    /// Suppresses the default submission side effect exactly once, whatever
    /// the outcome. Without a staged receipt this is a no-op: required-field
    /// presence is the rendered form's contract, not this service's.
    pub async fn handle_submit(
        &mut self,
        event: &mut dyn FormEvent,
        form: SubmitBillCommand,
    ) -> Result<(), StoreError> {
        event.prevent_default();

        let SubmissionState::FileStaged {
            bill_id,
            file_url,
            file_name,
        } = self.state.clone()
        else {
            warn!("submit without a staged receipt, ignoring");
            return Ok(());
        };

        self.state = SubmissionState::Submitting;
        let bill = Bill {
            id: bill_id,
            date: form.date,
            status: STATUS_PENDING.to_string(),
            amount: form.amount,
            vat: form.vat,
            pct: form.pct.unwrap_or(DEFAULT_PCT),
            expense_type: form.expense_type,
            name: form.name,
            commentary: form.commentary,
            comment_admin: None,
            file_url: Some(file_url),
            file_name: Some(file_name),
            email: self.session.email.clone(),
        };

        match self.store.update(bill).await {
            Ok(saved) => {
                info!("bill created: id={}", saved.id);
                self.state = SubmissionState::Created;
                self.navigator.navigate(Route::Bills);
                Ok(())
            }
            Err(e) => {
                self.state = SubmissionState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}

/// Case-insensitive check against [`ALLOWED_EXTENSIONS`].
pub fn has_allowed_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
