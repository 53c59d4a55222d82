use crate::model::ScraperError;

/// Anything that yields the raw listing labels of the product page, in page order.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn collect_labels(&self) -> Result<Vec<String>, ScraperError>;
}

/// Minimal surface of a headless browser session needed to load a lazily rendered list.
#[async_trait::async_trait]
pub trait BrowserDriver: Send + Sync {
    async fn goto(&self, url: &str) -> Result<(), ScraperError>;
    async fn scroll_height(&self) -> Result<u64, ScraperError>;
    async fn scroll_to_bottom(&self) -> Result<(), ScraperError>;
    async fn count(&self, selector: &str) -> Result<usize, ScraperError>;
    async fn texts(&self, selector: &str) -> Result<Vec<String>, ScraperError>;

    /// Ends the session. Safe to call when none is open.
    async fn close(&self) -> Result<(), ScraperError> {
        Ok(())
    }
}
