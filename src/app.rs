use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::spawn_income_statement_load,
    domain::{
        income_statement::{IncomeStatementRepository, SortKey},
        logging::LogComponent,
    },
    log_debug,
    presentation::{COLUMN_HEADERS, TableRow, stripe_class, table_rows},
    store::IncomeStatementStore,
};

const STYLES: &str = r#"
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }
    .min-h-screen { min-height: 100vh; }
    .bg-gray-100 { background: #f3f4f6; }
    .bg-gray-200 { background: #e5e7eb; }
    .bg-white { background: #ffffff; }
    .bg-blue-600 { background: #2563eb; }
    .text-white { color: #ffffff; }
    .text-center { text-align: center; }
    .text-2xl { font-size: 1.5rem; margin: 0; }
    .font-bold { font-weight: 700; }
    .p-4 { padding: 1rem; }
    .mt-4 { margin-top: 1rem; }
    .mb-4 { margin-bottom: 1rem; }
    .flex { display: flex; }
    .flex-wrap { flex-wrap: wrap; }
    .gap-2 { gap: 0.5rem; }
    .border { border: 1px solid #d1d5db; }
    .rounded { border-radius: 0.25rem; }
    .px-2 { padding-left: 0.5rem; padding-right: 0.5rem; }
    .py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
    .px-4 { padding-left: 1rem; padding-right: 1rem; }
    .py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
    .overflow-x-auto { overflow-x: auto; }
    .w-full { width: 100%; }
    .border-collapse { border-collapse: collapse; }
    .border-gray-300 { border: 1px solid #d1d5db; }
"#;

/// 📊 Income statement explorer: fetch once, then filter, sort and tabulate
#[component]
pub fn App<R>(repository: R) -> impl IntoView
where
    R: IncomeStatementRepository + 'static,
{
    let store = IncomeStatementStore::new();

    let load = spawn_income_statement_load(repository, store);
    on_cleanup(move || {
        log_debug!(LogComponent::Presentation("App"), "Component torn down, aborting load");
        load.abort();
    });

    view! {
        <style>{STYLES}</style>
        <Show
            when=move || !store.is_loading()
            fallback=|| view! { <div class="text-center mt-4">"Loading..."</div> }
        >
            <div class="min-h-screen bg-gray-100">
                <Header />
                <main class="p-4">
                    <FilterBar store=store />
                    <SortSelector store=store />
                    <StatementTable store=store />
                </main>
                <Footer />
            </div>
        </Show>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-blue-600 text-white p-4">
            <h1 class="text-2xl font-bold">"Financial Data"</h1>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-blue-600 text-white p-4 text-center">
            <p>"© Financial Data App"</p>
        </footer>
    }
}

/// Year and revenue bounds, bound two-way to the store
#[component]
fn FilterBar(store: IncomeStatementStore) -> impl IntoView {
    view! {
        <div class="filters mb-4 flex flex-wrap gap-2">
            <FilterInput
                placeholder="Start Year"
                value=Signal::derive(move || store.filter_form().start_year)
                on_input=move |value: String| store.set_start_year(value)
            />
            <FilterInput
                placeholder="End Year"
                value=Signal::derive(move || store.filter_form().end_year)
                on_input=move |value: String| store.set_end_year(value)
            />
            <FilterInput
                placeholder="Min Revenue"
                value=Signal::derive(move || store.filter_form().min_revenue)
                on_input=move |value: String| store.set_min_revenue(value)
            />
            <FilterInput
                placeholder="Max Revenue"
                value=Signal::derive(move || store.filter_form().max_revenue)
                on_input=move |value: String| store.set_max_revenue(value)
            />
        </div>
    }
}

#[component]
fn FilterInput(
    placeholder: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            placeholder=placeholder
            class="border px-2 py-1 rounded"
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
fn SortSelector(store: IncomeStatementStore) -> impl IntoView {
    view! {
        <div class="sorting mb-4">
            <select
                class="border px-2 py-1 rounded"
                on:change=move |ev| store.set_sort_key(SortKey::parse_lenient(&event_target_value(&ev)))
            >
                {SortKey::iter()
                    .map(move |key| {
                        view! {
                            <option value=key.to_string() prop:selected=move || store.sort_key() == key>
                                {key.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Rows are keyed by period date and occurrence; the stripe follows the current position.
#[component]
fn StatementTable(store: IncomeStatementStore) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table-auto w-full border-collapse border border-gray-200">
                <thead>
                    <tr class="bg-gray-200">
                        {COLUMN_HEADERS
                            .iter()
                            .map(|title| view! { <th class="border border-gray-300 px-4 py-2">{*title}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table_rows(&store.rows())
                        key=|row: &TableRow| (row.key.clone(), row.occurrence)
                        children=move |row: TableRow| {
                            let (key, occurrence) = (row.key.clone(), row.occurrence);
                            view! {
                                <tr class=move || {
                                    store.row_position(&key, occurrence).map(stripe_class).unwrap_or_default()
                                }>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <td class="border border-gray-300 px-4 py-2">{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
