use chrono::Utc;
use uuid::Uuid;

use crate::error::IntakeError;
use crate::models::{ContactForm, NewInquiry};
use crate::state::SharedState;

use super::validate;

/// Confirmation text returned to the submitter on success.
pub const CONFIRMATION: &str =
    "Your inquiry has been submitted successfully. We will contact you soon.";

pub struct Receipt {
    pub inquiry_id: Uuid,
    pub message: &'static str,
}

/// Parse, validate, and persist one contact-form submission. The single
/// insert is the only mutating step, so every invocation ends with either
/// one row written or none.
pub async fn run(state: &SharedState, body: &[u8]) -> Result<Receipt, IntakeError> {
    let form: ContactForm = serde_json::from_slice(body)
        .map_err(|e| IntakeError::BadRequest(format!("Invalid JSON: {e}")))?;

    validate::check(&form)?;

    let store_cfg = state
        .config
        .store
        .as_ref()
        .ok_or_else(|| IntakeError::Config("Storage configuration missing".to_string()))?;

    tracing::info!(
        name = %form.name.trim(),
        project_type = ?form.project_type,
        "Processing contact form submission"
    );

    let record = NewInquiry::from_form(&form, Utc::now());
    let inquiry = state.store.create(store_cfg, &record).await?;

    tracing::info!(inquiry_id = %inquiry.id, "Contact inquiry saved");

    Ok(Receipt {
        inquiry_id: inquiry.id,
        message: CONFIRMATION,
    })
}
