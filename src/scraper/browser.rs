// Lazy-loading pages driven through a headless browser session
use crate::config::SourceConfig;
use crate::model::ScraperError;
use crate::scraper::traits::{BrowserDriver, PageSource};

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

const WAIT_POLL: Duration = Duration::from_millis(500);

/// Scrolls to the bottom until the document height stops growing.
///
/// Returns the number of scrolls performed.
pub async fn scroll_until_stable<D: BrowserDriver + ?Sized>(
    driver: &D,
    pause: Duration,
) -> Result<usize, ScraperError> {
    let mut last_height = driver.scroll_height().await?;
    let mut scrolls = 0;

    loop {
        driver.scroll_to_bottom().await?;
        scrolls += 1;
        sleep(pause).await;

        let new_height = driver.scroll_height().await?;
        debug!("Scroll {}: height {} -> {}", scrolls, last_height, new_height);
        if new_height <= last_height {
            return Ok(scrolls);
        }
        last_height = new_height;
    }
}

/// Polls until at least one element matches `selector` or `timeout` elapses.
pub async fn wait_for_elements<D: BrowserDriver + ?Sized>(
    driver: &D,
    selector: &str,
    timeout: Duration,
) -> Result<usize, ScraperError> {
    let deadline = Instant::now() + timeout;
    loop {
        let found = driver.count(selector).await?;
        if found > 0 {
            return Ok(found);
        }
        if Instant::now() >= deadline {
            return Err(ScraperError::Timeout(selector.to_string()));
        }
        sleep(WAIT_POLL).await;
    }
}

pub struct BrowserPageSource<D> {
    driver: D,
    url: String,
    selector: String,
    pause: Duration,
    wait_timeout: Duration,
}

impl<D: BrowserDriver> BrowserPageSource<D> {
    pub fn from_config(driver: D, config: &SourceConfig) -> Self {
        Self {
            driver,
            url: config.url.clone(),
            selector: config.text_selector.clone(),
            pause: Duration::from_millis(config.scroll_pause_ms),
            wait_timeout: Duration::from_secs(config.wait_timeout_seconds),
        }
    }

    async fn load(&self) -> Result<Vec<String>, ScraperError> {
        info!("🌐 Opening {}", self.url);
        self.driver.goto(&self.url).await?;

        let found = wait_for_elements(&self.driver, &self.selector, self.wait_timeout).await?;
        info!("✅ {} elements ready, loading the rest...", found);

        let scrolls = scroll_until_stable(&self.driver, self.pause).await?;
        info!("📜 Page height stable after {} scrolls", scrolls);

        self.driver.texts(&self.selector).await
    }
}

#[async_trait::async_trait]
impl<D: BrowserDriver> PageSource for BrowserPageSource<D> {
    async fn collect_labels(&self) -> Result<Vec<String>, ScraperError> {
        let result = self.load().await;
        if let Err(e) = self.driver.close().await {
            warn!("Failed to close browser session: {}", e);
        }
        result
    }
}
