use serde::{Deserialize, Serialize};

/// Raw status codes as stored by the remote store.
///
/// Kept as plain strings on [`Bill`] so a code this build does not know about
/// flows through the display pipeline untouched instead of failing to parse.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_REFUSED: &str = "refused";

/// Fixed key under which the session user is persisted at login time.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Closed set of expense categories offered by the new-bill form.
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// One expense-report record.
///
/// `date` and `status` carry the raw stored forms; the display forms are
/// derived in the frontend crate. Wire field names are camelCase where the
/// store uses camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Store-assigned identifier.
    pub id: String,
    /// Zero-padded ISO date string (`YYYY-MM-DD`), raw stored form.
    pub date: String,
    /// Raw status code; see the `STATUS_*` constants for the known values.
    pub status: String,
    /// Expense amount.
    pub amount: f64,
    /// VAT amount.
    pub vat: f64,
    /// Reimbursement percentage.
    pub pct: f64,
    /// Expense category, one of [`EXPENSE_TYPES`].
    #[serde(rename = "type")]
    pub expense_type: String,
    /// Free-text label given by the employee.
    pub name: String,
    /// Free-text commentary given by the employee.
    pub commentary: String,
    /// Reviewer commentary; absent until an admin has looked at the bill.
    #[serde(rename = "commentAdmin", default)]
    pub comment_admin: Option<String>,
    /// Receipt attachment url, set once the upload succeeded.
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    /// Original name of the uploaded receipt file.
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    /// Owning user's identifier.
    pub email: String,
}

/// Response of the store's `create` operation: the reserved record key and
/// the url of the uploaded receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// Account kind of the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// The persisted session object, set at login time and injected read-only
/// into each page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// May be absent in older persisted sessions; defaults to empty.
    #[serde(default)]
    pub email: String,
}

impl SessionUser {
    pub fn employee(email: &str) -> Self {
        SessionUser {
            user_type: UserType::Employee,
            email: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bill() -> Bill {
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
            file_url: Some("https://localhost:3456/images/test.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            email: "a@a".to_string(),
        }
    }

    #[test]
    fn bill_serializes_with_wire_field_names() {
        let json = serde_json::to_string(&sample_bill()).unwrap();
        assert!(json.contains("\"type\":\"Hôtel et logement\""));
        assert!(json.contains("\"fileUrl\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"commentAdmin\":\"ok\""));
        assert!(!json.contains("expense_type"));
    }

    #[test]
    fn bill_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "qcCK3SzECmaZAGRrHjaC",
            "date": "2002-02-02",
            "status": "refused",
            "amount": 200.0,
            "vat": 40.0,
            "pct": 20.0,
            "type": "Fournitures de bureau",
            "name": "test2",
            "commentary": "",
            "email": "a@a"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.comment_admin, None);
        assert_eq!(bill.file_url, None);
        assert_eq!(bill.file_name, None);
        assert_eq!(bill.status, STATUS_REFUSED);
    }

    #[test]
    fn upload_response_parses_wire_shape() {
        let json = r#"{"fileUrl": "https://localhost:3456/images/test.jpg", "key": "1234"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.key, "1234");
        assert_eq!(response.file_url, "https://localhost:3456/images/test.jpg");
    }

    #[test]
    fn session_user_round_trips_persisted_shape() {
        let session = SessionUser::employee("user@example.com");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"type\":\"Employee\""));

        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn session_user_tolerates_missing_email() {
        let session: SessionUser = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert_eq!(session.user_type, UserType::Employee);
        assert_eq!(session.email, "");
    }
}
