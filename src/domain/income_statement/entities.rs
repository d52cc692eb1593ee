use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Domain entity - one fiscal period of the income statement.
///
/// Only the figures shown in the table are kept; every other field of the
/// provider payload is dropped during deserialization. A figure the provider
/// omits stays `None` instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub date: String,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub gross_profit: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub operating_income: Option<f64>,
}

impl FinancialRecord {
    /// Record with only a date and revenue, the two fields filtering looks at
    pub fn new(date: &str, revenue: f64) -> Self {
        Self {
            date: date.to_string(),
            revenue: Some(revenue),
            net_income: None,
            gross_profit: None,
            eps: None,
            operating_income: None,
        }
    }

    pub fn with_net_income(mut self, net_income: f64) -> Self {
        self.net_income = Some(net_income);
        self
    }

    /// Calendar date of the period end. Accepts `YYYY-MM-DD` optionally
    /// followed by a time part (`2023-09-30 00:00:00`, `2023-09-30T00:00:00Z`).
    pub fn fiscal_date(&self) -> Option<NaiveDate> {
        let day = self.date.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    pub fn year(&self) -> Option<i32> {
        self.fiscal_date().map(|date| date.year())
    }
}
