use crate::domain::errors::{AppError, AppResult};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";
pub const DEFAULT_SYMBOL: &str = "AAPL";
/// Public key accepted by the provider for a handful of demo tickers
pub const DEMO_API_KEY: &str = "demo";

/// Where the income statement comes from.
///
/// The ticker and period are fixed to one company's annual statement. The API key is read at build time from `FMP_API_KEY`
/// (`FMP_API_KEY=... trunk build`) so it never lives in the source tree.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    symbol: String,
    period: String,
    api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            period: "annual".to_string(),
            api_key: option_env!("FMP_API_KEY").unwrap_or(DEMO_API_KEY).to_string(),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("symbol", &self.symbol)
            .field("period", &self.period)
            .field("api_key", &"***")
            .finish()
    }
}

impl ProviderConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.is_empty() {
            return Err(AppError::Config("base url is empty".to_string()));
        }
        if self.symbol.is_empty() || !self.symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
            return Err(AppError::Config(format!("invalid symbol '{}'", self.symbol)));
        }
        if self.api_key.is_empty() {
            return Err(AppError::Config("api key is empty".to_string()));
        }
        Ok(())
    }

    /// `GET {base}/api/v3/income-statement/{symbol}?period=annual&apikey={key}`
    pub fn income_statement_url(&self) -> String {
        format!(
            "{}/api/v3/income-statement/{}?period={}&apikey={}",
            self.base_url, self.symbol, self.period, self.api_key
        )
    }

    /// Same URL with the key masked, safe for logs
    pub fn redacted_url(&self) -> String {
        format!(
            "{}/api/v3/income-statement/{}?period={}&apikey=***",
            self.base_url, self.symbol, self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_income_statement_url() {
        let config = ProviderConfig::default()
            .with_base_url("https://example.test/")
            .with_api_key("k3y");
        assert_eq!(
            config.income_statement_url(),
            "https://example.test/api/v3/income-statement/AAPL?period=annual&apikey=k3y"
        );
        assert!(!config.redacted_url().contains("k3y"));
        assert!(!format!("{:?}", config).contains("k3y"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_key_and_odd_symbols() {
        let config = ProviderConfig::default().with_api_key("");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = ProviderConfig { symbol: "AA/PL".to_string(), ..ProviderConfig::default() };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn defaults_to_aapl_annual() {
        let config = ProviderConfig::default();
        assert!(config.income_statement_url().starts_with("https://financialmodelingprep.com/api/v3/income-statement/AAPL?period=annual&apikey="));
    }
}
