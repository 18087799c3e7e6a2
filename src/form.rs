//! Client-side contact form controller.
//!
//! Owns the serializable state behind the contact page: field values,
//! per-field error messages, and the submitting/submitted flags. Validation
//! is a pure function over the field values; the hosting UI owns the mutable
//! container and re-renders from whatever state it gets back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validate::is_valid_email;

/// Error-map slot for failures of the submit call itself, as opposed to a
/// field-level validation error.
pub const SUBMIT_ERROR_KEY: &str = "submit";

/// Project types offered by the contact form. Rendered by the UI; the
/// server accepts any string here.
pub const PROJECT_TYPES: [&str; 6] = [
    "住宅室内设计",
    "商业空间设计",
    "建筑设计规划",
    "项目管理服务",
    "仅需咨询",
    "其他",
];

/// Budget ranges offered by the contact form.
pub const BUDGET_RANGES: [&str; 6] = [
    "25,000元以下",
    "25,000 - 50,000元",
    "50,000 - 100,000元",
    "100,000 - 250,000元",
    "250,000 - 500,000元",
    "500,000元以上",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    BudgetRange,
    Message,
}

impl Field {
    /// Wire name, also used as the error-map key.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "projectType",
            Field::BudgetRange => "budgetRange",
            Field::Message => "message",
        }
    }
}

/// Field values. Empty string means unset; serializes directly as the
/// intake request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget_range: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: BTreeMap<String, String>,
    pub submitting: bool,
    pub submitted: bool,
}

/// Pure validation over the current field values. Returns an empty map iff
/// every rule passes. The form is stricter than the server: phone, project
/// type, and budget range are required here but optional at the endpoint.
pub fn validate(fields: &FormFields) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name.as_str().into(), "Name is required".into());
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email.as_str().into(), "Email is required".into());
    } else if !is_valid_email(fields.email.trim()) {
        errors.insert(
            Field::Email.as_str().into(),
            "Enter a valid email address".into(),
        );
    }

    if fields.phone.trim().is_empty() {
        errors.insert(Field::Phone.as_str().into(), "Phone number is required".into());
    }

    if fields.project_type.is_empty() {
        errors.insert(
            Field::ProjectType.as_str().into(),
            "Select a project type".into(),
        );
    }

    if fields.budget_range.is_empty() {
        errors.insert(
            Field::BudgetRange.as_str().into(),
            "Select a budget range".into(),
        );
    }

    if fields.message.trim().is_empty() {
        errors.insert(
            Field::Message.as_str().into(),
            "Tell us briefly about your project".into(),
        );
    }

    errors
}

impl FormState {
    /// Set a field value. Clears any error previously recorded for that
    /// field without re-validating; the next submit re-checks everything.
    pub fn update_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Phone => &mut self.fields.phone,
            Field::ProjectType => &mut self.fields.project_type,
            Field::BudgetRange => &mut self.fields.budget_range,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.to_string();
        self.errors.remove(field.as_str());
    }

    /// Validate and, if clean, POST the fields to the intake endpoint.
    /// Exactly one network call per invocation that passes validation; a
    /// failed submit leaves the fields intact for manual resubmission.
    /// Returns whether the submission went through.
    pub async fn submit(&mut self, client: &reqwest::Client, endpoint: &str) -> bool {
        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.submitting = true;
        let outcome = send(client, endpoint, &self.fields).await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.fields = FormFields::default();
                self.errors.clear();
                self.submitted = true;
                true
            }
            Err(e) => {
                tracing::debug!("Contact form submit failed: {e}");
                self.errors.insert(
                    SUBMIT_ERROR_KEY.to_string(),
                    "Submission failed, please try again later".to_string(),
                );
                false
            }
        }
    }
}

async fn send(
    client: &reqwest::Client,
    endpoint: &str,
    fields: &FormFields,
) -> Result<(), String> {
    let resp = client
        .post(endpoint)
        .json(fields)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("intake responded {}", resp.status()));
    }

    let body: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| format!("unreadable response: {e}"))?;

    if body["data"]["success"].as_bool() == Some(true) {
        Ok(())
    } else {
        Err("response missing success envelope".to_string())
    }
}
