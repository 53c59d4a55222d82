// Core structs: ProductRecord, OutputRow, ColorAssignment
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One classified label. `brand` is empty when the first token is not a known brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub brand: String,
    pub model: String,
    pub date: String,
}

/// Outcome of trying to read a model field as a price.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceValue {
    Numeric(f64),
    Text(String),
}

/// Final spreadsheet row, in column order model / brand / date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub model: String,
    pub brand: String,
    pub date: String,
}

impl OutputRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.model, &self.brand, &self.date]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn is_valid(&self) -> bool {
        [self.red, self.green, self.blue]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

/// Background color for one sheet row. `row_index` is 1-based; row 1 is the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAssignment {
    pub row_index: usize,
    pub color: Rgb,
}

/// Everything the sheet needs for one full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetUpdate {
    pub header: Vec<String>,
    pub rows: Vec<OutputRow>,
    pub colors: Vec<ColorAssignment>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),

    #[error("environment variable {0} with the sheets token is not set")]
    MissingToken(String),
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    InvalidResponse(reqwest::StatusCode),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("browser driver error: {0}")]
    Driver(String),

    #[error("timed out waiting for elements matching {0}")]
    Timeout(String),
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("sheets API responded {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid sheets URL: {0}")]
    Url(String),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scraper(#[from] ScraperError),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}
