use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

/// Failure while talking to the external tabular store.
#[derive(Debug)]
pub enum StoreError {
    Request(String),
    Status(u16, String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Request(msg) => write!(f, "request failed: {msg}"),
            StoreError::Status(code, body) => write!(f, "HTTP {code}: {body}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Append-only row store. The submission handler only ever sees this
/// seam; tests inject an in-memory implementation.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn append_row(&self, name: &str, submitted_at: DateTime<Utc>) -> Result<(), StoreError>;
}

/// Google Sheets client appending to the first sheet of a fixed
/// spreadsheet via the values:append endpoint.
pub struct SheetsClient {
    client: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(api_base: String, spreadsheet_id: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            api_base,
            spreadsheet_id,
            access_token,
        }
    }
}

#[async_trait]
impl RowStore for SheetsClient {
    async fn append_row(&self, name: &str, submitted_at: DateTime<Utc>) -> Result<(), StoreError> {
        // Range A1 resolves against the first sheet of the spreadsheet.
        let url = format!(
            "{}/v4/spreadsheets/{}/values/A1:append?valueInputOption=RAW",
            self.api_base, self.spreadsheet_id
        );

        let body = json!({
            "values": [[name, submitted_at.to_rfc3339()]],
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(StoreError::Status(status.as_u16(), detail));
        }

        Ok(())
    }
}
