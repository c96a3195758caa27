use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::SheetError;
use crate::sheet::{parse_values_response, Sheet};
use crate::source::SheetSource;

/// Default base URL of the Google Sheets `values` API.
pub const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Configuration for the sheets client.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet (dataset) identifier.
    pub sheet_id: String,
    /// API key credential.
    pub api_key: String,
    /// Base URL of the values API. Overridable for tests and mirrors.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Additional attempts after a failed fetch.
    pub retries: u32,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            retries: 1,
        }
    }
}

/// Google Sheets `values` API client.
///
/// Each fetch is a single GET of the full tab; a failed attempt is retried
/// up to `retries` times after a short pause. The API key travels as a
/// query parameter and is never logged.
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Result<Self, SheetError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SheetError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build the values URL for a tab name.
    fn values_url(&self, sheet_name: &str) -> String {
        format!(
            "{}/{}/values/{}?key={}",
            self.config.endpoint,
            self.config.sheet_id,
            urlencoded(sheet_name),
            self.config.api_key,
        )
    }

    async fn fetch_once(&self, sheet_name: &str) -> Result<Sheet, SheetError> {
        let resp = self
            .http
            .get(self.values_url(sheet_name))
            .send()
            .await
            .map_err(|e| SheetError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetError::Status { status, body });
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SheetError::Decode(e.to_string()))?;

        Ok(Sheet::from_rows(parse_values_response(&body)))
    }
}

#[async_trait]
impl SheetSource for SheetsClient {
    async fn fetch(&self, sheet_name: &str) -> Result<Sheet, SheetError> {
        let mut last_err = None;
        for attempt in 0..=self.config.retries {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            match self.fetch_once(sheet_name).await {
                Ok(sheet) => return Ok(sheet),
                Err(e) => {
                    warn!(sheet = sheet_name, attempt, "sheet fetch failed: {}", e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| SheetError::Request("no attempts made".into())))
    }
}

/// Percent-encode a URL path/query component.
fn urlencoded(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                let encoded = ch.encode_utf8(&mut buf);
                for byte in encoded.bytes() {
                    result.push('%');
                    result.push_str(&format!("{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SheetsClient {
        SheetsClient::new(SheetsConfig {
            sheet_id: "sheet-123".to_string(),
            api_key: "key-abc".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_values_url() {
        let client = test_client();
        assert_eq!(
            client.values_url("Users"),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Users?key=key-abc"
        );
    }

    #[test]
    fn test_values_url_encodes_tab_name() {
        let client = test_client();
        let url = client.values_url("Bot List");
        assert!(url.contains("/values/Bot%20List?"));
    }

    #[test]
    fn test_config_defaults() {
        let config = SheetsConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.retries, 1);
    }
}
