//! In-memory stand-in for the remote store, used by the service test
//! suites.
//!
//! Behaves like the real store seen from the services: `list` serves a
//! seeded collection, `create` resolves to a fixed url/key pair, `update`
//! echoes the persisted record. Calls are recorded so tests can assert how
//! the services drive the store, and each operation can be armed to reject
//! with a given HTTP status.

use async_trait::async_trait;
use shared::{Bill, UploadResponse, STATUS_ACCEPTED, STATUS_PENDING, STATUS_REFUSED};
use std::sync::Mutex;

use super::{BillStore, ReceiptUpload, StoreError};

/// Url the mock's `create` resolves to.
pub const MOCK_FILE_URL: &str = "https://localhost:3456/images/test.jpg";
/// Record key the mock's `create` resolves to.
pub const MOCK_FILE_KEY: &str = "1234";

/// Canonical four-bill collection used across the test suites: one bill per
/// known status plus a second refused one, with distinct zero-padded dates.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            date: "2004-04-04".to_string(),
            status: STATUS_PENDING.to_string(),
            amount: 400.0,
            vat: 80.0,
            pct: 20.0,
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            commentary: "séminaire billed".to_string(),
            comment_admin: Some("ok".to_string()),
            file_url: Some(
                "https://test.storage.tld/v0/b/billable-677b6.appspot.com/preview-facture-free-201801-pdf-1.jpg"
                    .to_string(),
            ),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            email: "a@a".to_string(),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            date: "2001-01-01".to_string(),
            status: STATUS_REFUSED.to_string(),
            amount: 100.0,
            vat: 0.0,
            pct: 20.0,
            expense_type: "Restaurants et bars".to_string(),
            name: "test1".to_string(),
            commentary: "en fait non".to_string(),
            comment_admin: Some("en fait non".to_string()),
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.appspot.com/test1.jpg".to_string()),
            file_name: None,
            email: "a@a".to_string(),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            date: "2003-03-03".to_string(),
            status: STATUS_ACCEPTED.to_string(),
            amount: 300.0,
            vat: 60.0,
            pct: 20.0,
            expense_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            commentary: "".to_string(),
            comment_admin: Some("bon bah d'accord".to_string()),
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.appspot.com/facture-client-php.png".to_string()),
            file_name: Some("facture-client-php-exportee-dans-document.png".to_string()),
            email: "a@a".to_string(),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            date: "2002-02-02".to_string(),
            status: STATUS_REFUSED.to_string(),
            amount: 200.0,
            vat: 40.0,
            pct: 20.0,
            expense_type: "Fournitures de bureau".to_string(),
            name: "test2".to_string(),
            commentary: "".to_string(),
            comment_admin: None,
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.appspot.com/test2.jpg".to_string()),
            file_name: Some("test2.jpg".to_string()),
            email: "a@a".to_string(),
        },
    ]
}

/// In-memory [`BillStore`] with call recording and per-operation failure
/// injection.
#[derive(Default)]
pub struct MockBillStore {
    bills: Mutex<Vec<Bill>>,
    fail_list: Option<u16>,
    fail_create: Option<u16>,
    fail_update: Option<u16>,
    list_calls: Mutex<usize>,
    uploads: Mutex<Vec<ReceiptUpload>>,
    updates: Mutex<Vec<Bill>>,
}

impl MockBillStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with [`fixture_bills`].
    pub fn with_fixtures() -> Self {
        let store = Self::default();
        *store.bills.lock().unwrap() = fixture_bills();
        store
    }

    /// Arm `list` to reject with the given HTTP status.
    pub fn failing_list(mut self, status: u16) -> Self {
        self.fail_list = Some(status);
        self
    }

    /// Arm `create` to reject with the given HTTP status.
    pub fn failing_create(mut self, status: u16) -> Self {
        self.fail_create = Some(status);
        self
    }

    /// Arm `update` to reject with the given HTTP status.
    pub fn failing_update(mut self, status: u16) -> Self {
        self.fail_update = Some(status);
        self
    }

    /// Number of `list` calls received.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Uploads received through `create`, in order.
    pub fn uploads(&self) -> Vec<ReceiptUpload> {
        self.uploads.lock().unwrap().clone()
    }

    /// Records received through `update`, in order.
    pub fn updates(&self) -> Vec<Bill> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        *self.list_calls.lock().unwrap() += 1;
        if let Some(status) = self.fail_list {
            return Err(StoreError::Api { status });
        }
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<UploadResponse, StoreError> {
        self.uploads.lock().unwrap().push(upload);
        if let Some(status) = self.fail_create {
            return Err(StoreError::Api { status });
        }
        Ok(UploadResponse {
            file_url: MOCK_FILE_URL.to_string(),
            key: MOCK_FILE_KEY.to_string(),
        })
    }

    async fn update(&self, bill: Bill) -> Result<Bill, StoreError> {
        self.updates.lock().unwrap().push(bill.clone());
        if let Some(status) = self.fail_update {
            return Err(StoreError::Api { status });
        }
        let mut bills = self.bills.lock().unwrap();
        match bills.iter_mut().find(|stored| stored.id == bill.id) {
            Some(stored) => *stored = bill.clone(),
            None => bills.push(bill.clone()),
        }
        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_the_fixture_collection() {
        let store = MockBillStore::with_fixtures();
        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn update_persists_new_records() {
        let store = MockBillStore::new();
        let bill = fixture_bills().remove(0);
        let saved = store.update(bill.clone()).await.unwrap();
        assert_eq!(saved, bill);
        assert_eq!(store.list().await.unwrap(), vec![bill]);
    }

    #[tokio::test]
    async fn armed_operations_reject_with_their_status() {
        let store = MockBillStore::with_fixtures().failing_list(500);
        let err = store.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 500");
    }
}
