use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact form body as it arrives over the wire. Absent fields parse as
/// empty so the validation layer can report them; wrong-typed fields are
/// rejected at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Closed,
}

/// Insert payload for the `contact_inquiries` table. Optional fields
/// serialize as explicit nulls, which is what the store expects.
#[derive(Debug, Clone, Serialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewInquiry {
    /// Normalize a validated form into its stored shape: name and message
    /// trimmed, email trimmed and lower-cased, empty optionals collapsed
    /// to null. `created_at` and `updated_at` are equal on creation.
    pub fn from_form(form: &ContactForm, now: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            phone: form
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            project_type: form.project_type.clone().filter(|s| !s.is_empty()),
            budget_range: form.budget_range.clone().filter(|s| !s.is_empty()),
            message: form.message.trim().to_string(),
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Inquiry row as returned by the store's `return=representation` insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
