use crate::domain::{
    errors::{AppError, AppResult},
    income_statement::{FinancialRecord, IncomeStatementRepository},
    logging::{LogComponent, LogEntry, LogLevel, get_logger},
};
use crate::infrastructure::config::ProviderConfig;
use gloo::net::http::Request;

/// HTTP client for the financial data provider
#[derive(Debug, Clone, Default)]
pub struct FmpHttpClient {
    config: ProviderConfig,
}

impl FmpHttpClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetches the annual income statement. One request, no retry, no timeout.
    pub async fn get_income_statement(&self) -> AppResult<Vec<FinancialRecord>> {
        self.config.validate()?;

        get_logger().log(
            LogEntry::new(LogLevel::Info, LogComponent::Infrastructure("FmpHttpClient"), "📡 Requesting income statement")
                .with_metadata(&self.config.redacted_url()),
        );

        let response = Request::get(&self.config.income_statement_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(AppError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        let records = Self::parse_income_statement(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("FmpHttpClient"),
            &format!("✅ Received {} fiscal periods", records.len()),
        );

        Ok(records)
    }

    /// Parses the provider body: a JSON array of period objects.
    pub fn parse_income_statement(body: &str) -> AppResult<Vec<FinancialRecord>> {
        Ok(serde_json::from_str(body)?)
    }
}

impl IncomeStatementRepository for FmpHttpClient {
    async fn fetch_annual(&self) -> AppResult<Vec<FinancialRecord>> {
        self.get_income_statement().await
    }
}

#[cfg(test)]
mod tests {
    use super::FmpHttpClient;
    use crate::domain::errors::AppError;

    #[test]
    fn parses_array_of_periods() {
        let body = r#"[
            {"date":"2023-09-30","revenue":383285000000,"netIncome":96995000000,"grossProfit":169148000000,"eps":6.16,"operatingIncome":114301000000},
            {"date":"2022-09-24","revenue":394328000000,"netIncome":99803000000,"grossProfit":170782000000,"eps":6.15,"operatingIncome":119437000000}
        ]"#;
        let records = FmpHttpClient::parse_income_statement(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].year(), Some(2022));
    }

    #[test]
    fn html_body_is_a_decode_error() {
        let err = FmpHttpClient::parse_income_statement("<!DOCTYPE html><p>Bad gateway</p>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn provider_error_object_is_a_decode_error() {
        let body = r#"{"Error Message":"Invalid API KEY."}"#;
        assert!(matches!(FmpHttpClient::parse_income_statement(body), Err(AppError::Decode(_))));
    }
}
