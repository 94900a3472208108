//! Contract of the remote bills store.

use async_trait::async_trait;
use shared::{Bill, UploadResponse};
use thiserror::Error;

use crate::view::SelectedFile;

/// Payload of the `create` operation: the receipt file and the owning
/// user's identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptUpload {
    pub file: SelectedFile,
    pub email: String,
}

/// Failure of a remote store operation.
///
/// The `Display` text of the `Api` variant is exactly what the user sees in
/// place of the list or form ("Erreur 404", "Erreur 500"). Callers never
/// retry; rejection is the sole failure channel.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The server answered with a non-success HTTP status.
    #[error("Erreur {status}")]
    Api { status: u16 },
    /// The request never completed or the response could not be read.
    #[error("la connexion au serveur a échoué : {0}")]
    Network(#[from] reqwest::Error),
}

/// The `bills` resource of the remote store.
///
/// Every operation suspends until the server answers; the caller awaits the
/// outcome before touching UI state.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Full bill collection, in store order.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt file and reserve a bill record for it.
    async fn create(&self, upload: ReceiptUpload) -> Result<UploadResponse, StoreError>;

    /// Persist a complete bill record keyed by its id.
    async fn update(&self, bill: Bill) -> Result<Bill, StoreError>;
}
