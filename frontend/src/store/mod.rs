//! Remote store seam.
//!
//! [`traits::BillStore`] is the contract the page services are written
//! against; `crate::services::api` implements it over HTTP and
//! [`mock::MockBillStore`] implements it in memory for tests.

pub mod mock;
pub mod traits;

pub use traits::{BillStore, ReceiptUpload, StoreError};
