use crate::model::{ConfigError, Rgb};
use serde::Deserialize;
use std::fs;

/// How the listing page is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Headless Chrome through a WebDriver server; scrolls until lazy loading finishes.
    #[default]
    Browser,
    /// One plain GET of the served HTML.
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    #[serde(default)]
    pub mode: SourceMode,
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    #[serde(default = "default_headless")]
    pub headless: bool,
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_seconds: u64,
    #[serde(default = "default_text_selector")]
    pub text_selector: String,
    #[serde(default = "default_scroll_pause_ms")]
    pub scroll_pause_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub valid_brands: Vec<String>,
    pub strip_tokens: Vec<String>,
    /// Leading page elements (navigation, filters) that precede the product list.
    pub leading_offset: usize,
    pub markup_factor: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            valid_brands: strings(&[
                "Galaxy", "POCO", "Redmi", "iPhone", "Redtone", "VOCAL", "TCL", "NOKIA", "Honor",
                "Huawei", "GLX", "+Otel",
            ]),
            strip_tokens: strings(&["تومانءء", "تومان", "نامشخص"]),
            leading_offset: 25,
            markup_factor: 1.015,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub keywords: Vec<String>,
    pub match_color: Rgb,
    pub default_color: Rgb,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            keywords: strings(&["RAM", "Non Active", "FA", "Classic"]),
            match_color: Rgb::new(1.0, 1.0, 0.8),
            default_color: Rgb::new(0.85, 0.85, 0.85),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default = "default_header")]
    pub header: Vec<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    pub sheet: SheetConfig,
    #[serde(default)]
    pub repeat_interval_seconds: Option<u64>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::Invalid("source.url is empty".into()));
        }
        if self.sheet.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::Invalid("sheet.spreadsheet_id is empty".into()));
        }
        let factor = self.extraction.markup_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "extraction.markup_factor must be positive, got {}",
                factor
            )));
        }
        if self.sheet.header.len() != 3 {
            return Err(ConfigError::Invalid(format!(
                "sheet.header must have 3 columns, got {}",
                self.sheet.header.len()
            )));
        }
        if !self.highlight.match_color.is_valid() || !self.highlight.default_color.is_valid() {
            return Err(ConfigError::Invalid(
                "highlight colors must have channels in 0.0..=1.0".into(),
            ));
        }
        Ok(())
    }

    /// Reads the sheets bearer token from the configured environment variable.
    pub fn sheets_token(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.sheet.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ConfigError::MissingToken(self.sheet.token_env.clone())),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_text_selector() -> String {
    ".mantine-Text-root".into()
}

fn default_webdriver_url() -> String {
    "http://localhost:9515".into()
}

fn default_headless() -> bool {
    true
}

fn default_wait_timeout() -> u64 {
    30
}

fn default_scroll_pause_ms() -> u64 {
    2000
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) PriceSheetSniper/0.1".into()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_header() -> Vec<String> {
    strings(&["model", "brand", "update date"])
}

fn default_api_base() -> String {
    "https://sheets.googleapis.com".into()
}

fn default_token_env() -> String {
    "GOOGLE_SHEETS_TOKEN".into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "source": { "url": "https://example.com/quick-checkout" },
        "sheet": { "spreadsheet_id": "abc123" }
    }"#;

    #[test]
    fn minimal_config_gets_defaults() {
        let cfg = parse_config(MINIMAL).unwrap();
        assert_eq!(cfg.source.text_selector, ".mantine-Text-root");
        assert_eq!(cfg.source.scroll_pause_ms, 2000);
        assert_eq!(cfg.source.mode, SourceMode::Browser);
        assert_eq!(cfg.source.webdriver_url, "http://localhost:9515");
        assert!(cfg.source.headless);
        assert_eq!(cfg.source.wait_timeout_seconds, 30);
        assert_eq!(cfg.extraction.leading_offset, 25);
        assert_eq!(cfg.extraction.markup_factor, 1.015);
        assert!(cfg.extraction.valid_brands.iter().any(|b| b == "+Otel"));
        assert_eq!(cfg.highlight.keywords.len(), 4);
        assert_eq!(cfg.sheet.header, vec!["model", "brand", "update date"]);
        assert_eq!(cfg.sheet.sheet_id, 0);
        assert!(cfg.repeat_interval_seconds.is_none());
    }

    #[test]
    fn overrides_are_respected() {
        let cfg = parse_config(
            r#"{
                "source": { "url": "https://example.com", "scroll_pause_ms": 500, "mode": "http" },
                "extraction": { "valid_brands": ["Acme"], "leading_offset": 3 },
                "highlight": { "keywords": ["Pro"], "match_color": { "red": 0.5, "green": 0.5, "blue": 0.5 } },
                "sheet": { "spreadsheet_id": "id", "sheet_id": 42 },
                "repeat_interval_seconds": 3600
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.source.scroll_pause_ms, 500);
        assert_eq!(cfg.source.mode, SourceMode::Http);
        assert_eq!(cfg.extraction.valid_brands, vec!["Acme"]);
        assert_eq!(cfg.extraction.leading_offset, 3);
        // Fields missing from a partial section fall back to their defaults.
        assert_eq!(cfg.extraction.markup_factor, 1.015);
        assert_eq!(cfg.highlight.match_color, Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(cfg.highlight.default_color, Rgb::new(0.85, 0.85, 0.85));
        assert_eq!(cfg.sheet.sheet_id, 42);
        assert_eq!(cfg.repeat_interval_seconds, Some(3600));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_markup = r#"{
            "source": { "url": "https://example.com" },
            "extraction": { "markup_factor": 0.0 },
            "sheet": { "spreadsheet_id": "id" }
        }"#;
        assert!(matches!(parse_config(bad_markup), Err(ConfigError::Invalid(_))));

        let bad_header = r#"{
            "source": { "url": "https://example.com" },
            "sheet": { "spreadsheet_id": "id", "header": ["a", "b"] }
        }"#;
        assert!(matches!(parse_config(bad_header), Err(ConfigError::Invalid(_))));

        let empty_url = r#"{
            "source": { "url": " " },
            "sheet": { "spreadsheet_id": "id" }
        }"#;
        assert!(matches!(parse_config(empty_url), Err(ConfigError::Invalid(_))));

        assert!(matches!(parse_config("{"), Err(ConfigError::Json(_))));

        let bad_mode = r#"{
            "source": { "url": "https://example.com", "mode": "selenium" },
            "sheet": { "spreadsheet_id": "id" }
        }"#;
        assert!(matches!(parse_config(bad_mode), Err(ConfigError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let cfg = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.sheet.spreadsheet_id, "abc123");

        assert!(matches!(load_config("/nonexistent/config.json"), Err(ConfigError::Io(_))));
    }

    #[test]
    fn missing_token_is_reported_with_variable_name() {
        let mut cfg = parse_config(MINIMAL).unwrap();
        cfg.sheet.token_env = "PRICE_SHEET_SNIPER_TEST_UNSET_TOKEN".into();
        match cfg.sheets_token() {
            Err(ConfigError::MissingToken(name)) => {
                assert_eq!(name, "PRICE_SHEET_SNIPER_TEST_UNSET_TOKEN")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
