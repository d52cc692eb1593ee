#![cfg(feature = "browser")]

use income_statement_wasm::application::spawn_income_statement_load;
use income_statement_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use income_statement_wasm::infrastructure::{BrowserTimeProvider, ConsoleLogger, FmpHttpClient, ProviderConfig};
use income_statement_wasm::store::IncomeStatementStore;
use leptos::create_runtime;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new_development();
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        logger.log(LogEntry::new(level, LogComponent::Infrastructure("Test"), "console smoke test"));
    }
}

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider;
    let now = clock.current_timestamp();
    assert!(now > 0);
    assert_eq!(clock.format_timestamp(now).len(), "00:00:00.000".len());
}

#[wasm_bindgen_test]
fn aborted_request_leaves_store_untouched() {
    let runtime = create_runtime();
    let store = IncomeStatementStore::new();
    // unroutable host: the request can only fail, and must not even get that far
    let config = ProviderConfig::default().with_base_url("http://127.0.0.1:9");
    let handle = spawn_income_statement_load(FmpHttpClient::new(config), store);
    handle.abort();
    assert!(store.is_loading());
    assert!(store.rows().is_empty());
    runtime.dispose();
}
