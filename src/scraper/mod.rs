pub mod browser;
pub mod fetcher;
pub mod traits;
pub mod webdriver;

pub use browser::BrowserPageSource;
pub use fetcher::HttpPageSource;
pub use traits::{BrowserDriver, PageSource};
pub use webdriver::WebDriverClient;
