use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::auth::ServiceAccount;
use crate::config::{SHEET_RANGE, SheetsConfig};
use crate::error::{RelayError, RelayResult};
use crate::record::AnalysisRecord;

/// Values are parsed as if typed into the sheet by hand
pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_range: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Appends analysis records as rows of the configured spreadsheet
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Build a client whose calls are bounded by `config.timeout`
    pub fn new(config: SheetsConfig) -> RelayResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(SheetsClient { http, config })
    }

    fn append_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.config.api_base, spreadsheet_id, SHEET_RANGE
        )
    }

    /// Append `record` as one new row
    ///
    /// Authenticates from scratch on every call. Nothing is deduplicated, so
    /// appending the same record twice yields two rows.
    pub async fn append_record(&self, record: &AnalysisRecord) -> RelayResult<Option<String>> {
        let account = ServiceAccount::from_config(&self.config)?;
        let spreadsheet_id = self
            .config
            .spreadsheet_id
            .as_deref()
            .ok_or(RelayError::MissingConfig("GOOGLE_SHEETS_SHEET_ID"))?;

        let token = account.fetch_access_token(&self.http).await?;
        debug!(client_email = account.client_email(), "obtained access token");

        let response = self
            .http
            .post(self.append_url(spreadsheet_id))
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(token)
            .json(&json!({ "values": [record.to_row()] }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RelayError::SheetsApi {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: AppendResponse = serde_json::from_str(&body)
            .map_err(|e| RelayError::UnexpectedResponse(format!("append response: {}", e)))?;
        let updated_range = parsed.updates.and_then(|u| u.updated_range);

        info!(
            spreadsheet_id,
            updated_range = updated_range.as_deref().unwrap_or("unknown"),
            "appended row"
        );
        Ok(updated_range)
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => "empty response".to_string(),
        _ => body.trim().to_string(),
    }
}
