use super::FinancialRecord;
use crate::domain::errors::AppResult;

/// Source of annual income statement records for the tracked company
#[allow(async_fn_in_trait)]
pub trait IncomeStatementRepository {
    async fn fetch_annual(&self) -> AppResult<Vec<FinancialRecord>>;
}
