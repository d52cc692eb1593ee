use super::{FilterCriteria, FinancialRecord, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Keeps the records that satisfy every set bound, in their original order.
///
/// A record whose year or revenue is unknown fails any bound placed on that
/// quantity and passes when the bound is unset.
pub fn filter_records(records: &[FinancialRecord], criteria: &FilterCriteria) -> Vec<FinancialRecord> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect()
}

pub fn matches_criteria(record: &FinancialRecord, criteria: &FilterCriteria) -> bool {
    let year = record.year();
    let revenue = record.revenue;

    within(year, criteria.start_year, |year, bound| year >= bound)
        && within(year, criteria.end_year, |year, bound| year <= bound)
        && within(revenue, criteria.min_revenue, |revenue, bound| revenue >= bound)
        && within(revenue, criteria.max_revenue, |revenue, bound| revenue <= bound)
}

fn within<T: Copy>(value: Option<T>, bound: Option<T>, check: impl Fn(T, T) -> bool) -> bool {
    match (value, bound) {
        (_, None) => true,
        (Some(value), Some(bound)) => check(value, bound),
        (None, Some(_)) => false,
    }
}

/// Returns a new, stably sorted vector; `records` is left untouched.
///
/// - `Date`: oldest first, unparseable dates before everything else
/// - `Revenue` / `NetIncome`: largest first, missing figures last
/// - `None`: input order
pub fn sort_records(records: &[FinancialRecord], key: SortKey) -> Vec<FinancialRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::None => {}
        SortKey::Date => sorted.sort_by_key(|record| record.fiscal_date()),
        SortKey::Revenue => sorted.sort_by(|a, b| descending(a.revenue, b.revenue)),
        SortKey::NetIncome => sorted.sort_by(|a, b| descending(a.net_income, b.net_income)),
    }
    sorted
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Full derived view: filter, then sort.
pub fn derive_rows(records: &[FinancialRecord], criteria: &FilterCriteria, key: SortKey) -> Vec<FinancialRecord> {
    sort_records(&filter_records(records, criteria), key)
}

/// Dates that appear more than once; the table keys rows by date.
pub fn duplicate_dates(records: &[FinancialRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.date.as_str()) && !duplicates.contains(&record.date) {
            duplicates.push(record.date.clone());
        }
    }
    duplicates
}
