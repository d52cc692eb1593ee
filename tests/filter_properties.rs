use income_statement_wasm::domain::income_statement::{
    FilterCriteria, FilterForm, FinancialRecord, filter_records, matches_criteria,
};
use quickcheck_macros::quickcheck;

fn make_records(raw: &[(u8, u8, i16)]) -> Vec<FinancialRecord> {
    raw.iter()
        .map(|&(year, month, revenue)| {
            let date = format!("{}-{:02}-28", 2000 + (year % 30) as i32, 1 + month % 12);
            FinancialRecord::new(&date, revenue as f64)
        })
        .collect()
}

fn make_criteria(bounds: (Option<u8>, Option<u8>, Option<i16>, Option<i16>)) -> FilterCriteria {
    FilterCriteria {
        start_year: bounds.0.map(|y| 2000 + (y % 30) as i32),
        end_year: bounds.1.map(|y| 2000 + (y % 30) as i32),
        min_revenue: bounds.2.map(f64::from),
        max_revenue: bounds.3.map(f64::from),
    }
}

fn satisfies_every_bound(record: &FinancialRecord, c: &FilterCriteria) -> bool {
    let year = record.year().unwrap();
    let revenue = record.revenue.unwrap();
    c.start_year.is_none_or(|b| year >= b)
        && c.end_year.is_none_or(|b| year <= b)
        && c.min_revenue.is_none_or(|b| revenue >= b)
        && c.max_revenue.is_none_or(|b| revenue <= b)
}

#[quickcheck]
fn unbounded_filter_is_identity(raw: Vec<(u8, u8, i16)>) -> bool {
    let records = make_records(&raw);
    filter_records(&records, &FilterCriteria::default()) == records
}

#[quickcheck]
fn kept_records_satisfy_and_dropped_records_violate(
    raw: Vec<(u8, u8, i16)>,
    bounds: (Option<u8>, Option<u8>, Option<i16>, Option<i16>),
) -> bool {
    let records = make_records(&raw);
    let criteria = make_criteria(bounds);
    let kept = filter_records(&records, &criteria);

    let sound = kept.iter().all(|r| satisfies_every_bound(r, &criteria));
    let complete = records
        .iter()
        .filter(|r| !matches_criteria(r, &criteria))
        .all(|r| !satisfies_every_bound(r, &criteria));
    let expected: Vec<_> = records.iter().filter(|r| satisfies_every_bound(r, &criteria)).cloned().collect();

    sound && complete && kept == expected
}

#[quickcheck]
fn filtering_is_idempotent_and_leaves_input_alone(
    raw: Vec<(u8, u8, i16)>,
    bounds: (Option<u8>, Option<u8>, Option<i16>, Option<i16>),
) -> bool {
    let records = make_records(&raw);
    let snapshot = records.clone();
    let criteria = make_criteria(bounds);
    let first = filter_records(&records, &criteria);
    let second = filter_records(&records, &criteria);
    first == second && records == snapshot
}

#[test]
fn form_text_drives_the_filter() {
    let records = make_records(&[(20, 0, 100), (21, 0, 200), (22, 0, 150)]);
    let form = FilterForm { start_year: "2021".into(), max_revenue: "not a number".into(), ..Default::default() };
    let kept = filter_records(&records, &form.criteria());
    let years: Vec<_> = kept.iter().filter_map(FinancialRecord::year).collect();
    assert_eq!(years, [2021, 2022]);
}
