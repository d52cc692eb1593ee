use crate::domain::income_statement::FinancialRecord;
use serde::Serialize;
use std::collections::HashMap;

pub const COLUMN_HEADERS: [&str; 6] = ["Date", "Revenue", "Net Income", "Gross Profit", "EPS", "Operating Income"];

pub const EVEN_ROW_CLASS: &str = "bg-white";
pub const ODD_ROW_CLASS: &str = "bg-gray-100";

/// One rendered table row, keyed by the period date.
///
/// `occurrence` counts earlier rows with the same date (0 for a unique date),
/// so restated periods sharing a date still get their own row and stripe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub occurrence: usize,
    pub cells: [String; 6],
}

impl From<&FinancialRecord> for TableRow {
    fn from(record: &FinancialRecord) -> Self {
        Self {
            key: record.date.clone(),
            occurrence: 0,
            cells: [
                record.date.clone(),
                format_figure(record.revenue),
                format_figure(record.net_income),
                format_figure(record.gross_profit),
                format_figure(record.eps),
                format_figure(record.operating_income),
            ],
        }
    }
}

pub fn table_rows(records: &[FinancialRecord]) -> Vec<TableRow> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    records
        .iter()
        .map(|record| {
            let count = seen.entry(record.date.as_str()).or_insert(0);
            let row = TableRow { occurrence: *count, ..TableRow::from(record) };
            *count += 1;
            row
        })
        .collect()
}

/// Index of the `occurrence`-th record dated `date`
pub fn row_position(records: &[FinancialRecord], date: &str, occurrence: usize) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.date == date)
        .nth(occurrence)
        .map(|(index, _)| index)
}

/// Even rows white, odd rows grey
pub fn stripe_class(index: usize) -> &'static str {
    if index % 2 == 0 { EVEN_ROW_CLASS } else { ODD_ROW_CLASS }
}

/// Figures are shown as the provider sent them; missing ones as an empty cell.
pub fn format_figure(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
