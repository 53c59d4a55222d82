mod analyzer;
mod calendar;
mod config;
mod model;
mod normalizer;
mod parser;
mod pipeline;
mod scraper;
mod sheets;
#[cfg(test)]
mod test_support;

use config::{load_config, AppConfig, SourceMode};
use model::RunError;
use pipeline::{run_once, Pipeline};
use crate::scraper::{BrowserPageSource, HttpPageSource, PageSource, WebDriverClient};
use sheets::GoogleSheetsWriter;
use std::process::ExitCode;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let (source, writer) = match connect(&config) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let pipeline = Pipeline::from_config(&config);

    loop {
        info!("🚀 Starting pass for {}", config.source.url);
        let result = run_once(&pipeline, source.as_ref(), &writer).await;

        let Some(interval) = config.repeat_interval_seconds else {
            return match result {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("❌ Pass failed: {}", e);
                    ExitCode::FAILURE
                }
            };
        };

        if let Err(e) = result {
            error!("❌ Pass failed: {}", e);
        }
        info!("Waiting {}s for the next pass...", interval);
        sleep(Duration::from_secs(interval)).await;
    }
}

/// Builds both collaborators. The token is checked first so a bad setup never touches the page.
fn connect(config: &AppConfig) -> Result<(Box<dyn PageSource>, GoogleSheetsWriter), RunError> {
    let token = config.sheets_token()?;
    let source: Box<dyn PageSource> = match config.source.mode {
        SourceMode::Browser => {
            info!("🧭 Loading pages through WebDriver at {}", config.source.webdriver_url);
            let driver = WebDriverClient::new(&config.source)?;
            Box::new(BrowserPageSource::from_config(driver, &config.source))
        }
        SourceMode::Http => Box::new(HttpPageSource::new(&config.source)?),
    };
    let writer = GoogleSheetsWriter::new(&config.sheet, token)?;
    Ok((source, writer))
}
