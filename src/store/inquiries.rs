use crate::config::StoreConfig;
use crate::error::IntakeError;
use crate::models::{Inquiry, NewInquiry};

/// REST client for the managed `contact_inquiries` table.
pub struct InquiryStore {
    client: reqwest::Client,
}

impl InquiryStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Insert one inquiry row and return the created representation.
    pub async fn create(
        &self,
        cfg: &StoreConfig,
        record: &NewInquiry,
    ) -> Result<Inquiry, IntakeError> {
        let url = format!(
            "{}/rest/v1/contact_inquiries",
            cfg.base_url.trim_end_matches('/')
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&cfg.service_role_key)
            .header("apikey", &cfg.service_role_key)
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| IntakeError::Upstream(format!("Failed to save inquiry: {e}")))?;

        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(IntakeError::Upstream(format!(
                "Failed to save inquiry: {text}"
            )));
        }

        // The store answers a representation insert with an array of the
        // created rows.
        let mut rows: Vec<Inquiry> = resp
            .json()
            .await
            .map_err(|e| IntakeError::Upstream(format!("Unexpected insert response: {e}")))?;

        if rows.is_empty() {
            return Err(IntakeError::Upstream(
                "Insert returned no representation".to_string(),
            ));
        }

        Ok(rows.remove(0))
    }
}

impl Default for InquiryStore {
    fn default() -> Self {
        Self::new()
    }
}
