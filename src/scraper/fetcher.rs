use crate::config::SourceConfig;
use crate::model::ScraperError;
use crate::scraper::traits::PageSource;

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::info;

/// Fetches the page once over HTTP and reads labels from the served HTML.
pub struct HttpPageSource {
    client: Client,
    url: String,
    selector: Selector,
}

impl HttpPageSource {
    pub fn new(config: &SourceConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        let selector = parse_selector(&config.text_selector)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            selector,
        })
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn collect_labels(&self) -> Result<Vec<String>, ScraperError> {
        info!("🌐 Fetching {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status()));
        }

        let html = response.text().await?;
        Ok(extract_labels(&html, &self.selector))
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector(e.to_string()))
}

/// Text content of every element matching `selector`, in document order.
pub fn extract_labels(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}
