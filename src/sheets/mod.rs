pub mod requests;
pub mod sender;

use crate::config::SheetConfig;
use crate::model::{SheetError, SheetUpdate};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::info;

/// Destination of a finished table. A publish either lands completely or not at all.
#[async_trait::async_trait]
pub trait SheetWriter: Send + Sync {
    async fn publish(&self, update: &SheetUpdate) -> Result<(), SheetError>;
}

/// Google Sheets v4 REST client authenticated with a bearer token.
pub struct GoogleSheetsWriter {
    pub client: Client,
    pub token: String,
    pub api_base: String,
    pub spreadsheet_id: String,
    pub sheet_id: i64,
}

impl GoogleSheetsWriter {
    pub fn new(config: &SheetConfig, token: String) -> Result<Self, SheetError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            token,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_id: config.sheet_id,
        })
    }

    /// `{api_base}/v4/spreadsheets/...segments`, with each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, SheetError> {
        let mut url = Url::parse(&self.api_base).map_err(|e| SheetError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetError::Url(format!("{} cannot be a base URL", self.api_base)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets"])
            .extend(segments);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SheetWriter for GoogleSheetsWriter {
    async fn publish(&self, update: &SheetUpdate) -> Result<(), SheetError> {
        let batch = format!("{}:batchUpdate", self.spreadsheet_id);
        let url = self.endpoint(&[batch.as_str()])?;
        let body = requests::publish_body(self.sheet_id, update);
        sender::post_json(self, url, &body).await?;
        info!(
            "📝 Replaced sheet {} with header + {} rows, {} colors",
            self.sheet_id,
            update.rows.len(),
            update.colors.len()
        );
        Ok(())
    }
}
