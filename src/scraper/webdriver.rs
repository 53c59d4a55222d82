// W3C WebDriver client (chromedriver and friends) over plain JSON requests
use crate::config::SourceConfig;
use crate::model::ScraperError;
use crate::scraper::traits::BrowserDriver;

use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

const SCROLL_HEIGHT: &str = "return document.body.scrollHeight;";
const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight);";
const COUNT: &str = "return document.querySelectorAll(arguments[0]).length;";
const TEXTS: &str =
    "return Array.from(document.querySelectorAll(arguments[0]), e => e.innerText);";

/// One browser session on a WebDriver server, opened lazily by the first `goto`.
pub struct WebDriverClient {
    client: Client,
    base_url: String,
    headless: bool,
    user_agent: String,
    session: Mutex<Option<String>>,
}

impl WebDriverClient {
    pub fn new(config: &SourceConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.webdriver_url.trim_end_matches('/').to_string(),
            headless: config.headless,
            user_agent: config.user_agent.clone(),
            session: Mutex::new(None),
        })
    }

    fn capabilities(&self) -> Value {
        let mut args = vec!["--no-sandbox".to_string(), "--disable-dev-shm-usage".to_string()];
        if self.headless {
            args.insert(0, "--headless".into());
        }
        if !self.user_agent.is_empty() {
            args.push(format!("--user-agent={}", self.user_agent));
        }
        json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "chrome",
                    "goog:chromeOptions": { "args": args }
                }
            }
        })
    }

    /// Sends one command and unwraps the `value` member of the reply.
    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ScraperError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("WebDriver {} {}", method, path);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let mut payload: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            let error = payload["value"]["error"].as_str().unwrap_or("unknown error");
            let message = payload["value"]["message"].as_str().unwrap_or(text.as_str());
            return Err(ScraperError::Driver(format!("{} ({}): {}", error, status, message)));
        }
        Ok(payload.get_mut("value").map(Value::take).unwrap_or(Value::Null))
    }

    async fn session_path(&self, suffix: &str) -> Result<String, ScraperError> {
        match self.session.lock().await.as_deref() {
            Some(id) => Ok(format!("/session/{}/{}", id, suffix)),
            None => Err(ScraperError::Driver("no open session".into())),
        }
    }

    async fn execute(&self, script: &str, args: Value) -> Result<Value, ScraperError> {
        let path = self.session_path("execute/sync").await?;
        self.command(Method::POST, &path, Some(json!({ "script": script, "args": args })))
            .await
    }
}

#[async_trait::async_trait]
impl BrowserDriver for WebDriverClient {
    async fn goto(&self, url: &str) -> Result<(), ScraperError> {
        {
            let mut session = self.session.lock().await;
            if session.is_none() {
                let reply = self
                    .command(Method::POST, "/session", Some(self.capabilities()))
                    .await?;
                let id = reply["sessionId"]
                    .as_str()
                    .ok_or_else(|| ScraperError::Driver("session reply without sessionId".into()))?;
                info!("🧭 WebDriver session {} started", id);
                *session = Some(id.to_string());
            }
        }

        let path = self.session_path("url").await?;
        self.command(Method::POST, &path, Some(json!({ "url": url }))).await?;
        Ok(())
    }

    async fn scroll_height(&self) -> Result<u64, ScraperError> {
        let value = self.execute(SCROLL_HEIGHT, json!([])).await?;
        value
            .as_f64()
            .map(|height| height.max(0.0) as u64)
            .ok_or_else(|| ScraperError::Driver(format!("unexpected scroll height {}", value)))
    }

    async fn scroll_to_bottom(&self) -> Result<(), ScraperError> {
        self.execute(SCROLL_TO_BOTTOM, json!([])).await?;
        Ok(())
    }

    async fn count(&self, selector: &str) -> Result<usize, ScraperError> {
        let value = self.execute(COUNT, json!([selector])).await?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| ScraperError::Driver(format!("unexpected element count {}", value)))
    }

    async fn texts(&self, selector: &str) -> Result<Vec<String>, ScraperError> {
        let value = self.execute(TEXTS, json!([selector])).await?;
        let items = value
            .as_array()
            .ok_or_else(|| ScraperError::Driver("element texts are not a list".into()))?;
        Ok(items
            .iter()
            .map(|item| item.as_str().unwrap_or_default().to_string())
            .collect())
    }

    async fn close(&self) -> Result<(), ScraperError> {
        let Some(id) = self.session.lock().await.take() else {
            return Ok(());
        };
        self.command(Method::DELETE, &format!("/session/{}", id), None).await?;
        info!("WebDriver session {} closed", id);
        Ok(())
    }
}
