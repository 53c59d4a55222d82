// sheets/sender.rs

use crate::model::SheetError;
use crate::sheets::GoogleSheetsWriter;
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, warn};

pub async fn post_json(writer: &GoogleSheetsWriter, url: Url, body: &Value) -> Result<(), SheetError> {
    send(writer.client.post(url).bearer_auth(&writer.token).json(body)).await
}

async fn send(request: RequestBuilder) -> Result<(), SheetError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    if !status.is_success() {
        warn!("❌ Sheets API error [{}]: {}", status, body);
        return Err(SheetError::Status { status, body });
    }
    debug!("Sheets API response [{}]: {}", status, body);
    Ok(())
}
