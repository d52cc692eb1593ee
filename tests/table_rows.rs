use income_statement_wasm::domain::income_statement::{FilterForm, SortKey, derive_rows};
use income_statement_wasm::infrastructure::FmpHttpClient;
use income_statement_wasm::presentation::table_rows;

const PROVIDER_BODY: &str = r#"[
    {"date":"2023-09-30","symbol":"AAPL","revenue":383285000000,"netIncome":96995000000,"grossProfit":169148000000,"eps":6.16,"operatingIncome":114301000000},
    {"date":"2022-09-24","symbol":"AAPL","revenue":394328000000,"netIncome":99803000000,"grossProfit":170782000000,"eps":6.15,"operatingIncome":119437000000},
    {"date":"2021-09-25","symbol":"AAPL","revenue":365817000000,"netIncome":94680000000,"grossProfit":152836000000,"eps":5.67,"operatingIncome":108949000000}
]"#;

#[test]
fn revenue_sorted_rows_from_provider_payload() {
    let records = FmpHttpClient::parse_income_statement(PROVIDER_BODY).unwrap();
    let form = FilterForm { start_year: "2022".into(), ..Default::default() };
    let rows = table_rows(&derive_rows(&records, &form.criteria(), SortKey::Revenue));

    insta::assert_json_snapshot!(rows, @r###"
    [
      {
        "key": "2022-09-24",
        "occurrence": 0,
        "cells": [
          "2022-09-24",
          "394328000000",
          "99803000000",
          "170782000000",
          "6.15",
          "119437000000"
        ]
      },
      {
        "key": "2023-09-30",
        "occurrence": 0,
        "cells": [
          "2023-09-30",
          "383285000000",
          "96995000000",
          "169148000000",
          "6.16",
          "114301000000"
        ]
      }
    ]
    "###);
}
