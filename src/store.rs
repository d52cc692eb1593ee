use crate::domain::{
    income_statement::{
        FilterCriteria, FilterForm, FinancialRecord, LoadPhase, SortKey, duplicate_dates, filter_records,
        sort_records,
    },
    logging::LogComponent,
};
use crate::log_warn;
use crate::presentation::row_position;
use leptos::*;

/// Reactive state of the income statement view.
///
/// Owns the dataset, the filter inputs and the sort key; everything the table
/// shows is derived from these three through memos, so the rendered rows are
/// a pure function of them. Fields are private: mutate through the methods.
#[derive(Clone, Copy)]
pub struct IncomeStatementStore {
    phase: RwSignal<LoadPhase>,
    dataset: RwSignal<Option<Vec<FinancialRecord>>>,
    filters: RwSignal<FilterForm>,
    sort_key: RwSignal<SortKey>,
    filtered: Memo<Vec<FinancialRecord>>,
    rows: Memo<Vec<FinancialRecord>>,
}

impl IncomeStatementStore {
    /// Must be called inside a reactive owner (component or runtime).
    pub fn new() -> Self {
        let phase = create_rw_signal(LoadPhase::Idle);
        let dataset = create_rw_signal::<Option<Vec<FinancialRecord>>>(None);
        let filters = create_rw_signal(FilterForm::default());
        let sort_key = create_rw_signal(SortKey::None);

        let filtered = create_memo(move |_| {
            let criteria = filters.with(FilterForm::criteria);
            dataset.with(|records| match records {
                Some(records) => filter_records(records, &criteria),
                None => Vec::new(),
            })
        });
        let rows = create_memo(move |_| {
            let key = sort_key.get();
            filtered.with(|records| sort_records(records, key))
        });

        Self { phase, dataset, filters, sort_key, filtered, rows }
    }

    pub fn begin_loading(&self) {
        if self.phase.get_untracked() == LoadPhase::Idle {
            self.phase.set(LoadPhase::Loading);
        }
    }

    /// Stores the dataset. Only the first successful load is kept.
    pub fn load_succeeded(&self, records: Vec<FinancialRecord>) {
        if self.dataset.with_untracked(Option::is_some) {
            log_warn!(
                LogComponent::Presentation("IncomeStatementStore"),
                "Dataset already loaded, ignoring {} records",
                records.len()
            );
            return;
        }
        let duplicates = duplicate_dates(&records);
        if !duplicates.is_empty() {
            log_warn!(
                LogComponent::Presentation("IncomeStatementStore"),
                "⚠️ Periods share a date, rows are told apart by position only: {}",
                duplicates.join(", ")
            );
        }
        self.dataset.set(Some(records));
        self.phase.set(LoadPhase::Ready);
    }

    /// The view keeps showing the loading indicator.
    pub fn load_failed(&self) {
        if self.phase.get_untracked() != LoadPhase::Ready {
            self.phase.set(LoadPhase::Stalled);
        }
    }

    pub fn set_start_year(&self, value: String) {
        self.filters.update(|form| form.start_year = value);
    }

    pub fn set_end_year(&self, value: String) {
        self.filters.update(|form| form.end_year = value);
    }

    pub fn set_min_revenue(&self, value: String) {
        self.filters.update(|form| form.min_revenue = value);
    }

    pub fn set_max_revenue(&self, value: String) {
        self.filters.update(|form| form.max_revenue = value);
    }

    pub fn set_sort_key(&self, key: SortKey) {
        self.sort_key.set(key);
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.get()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.get().is_loading()
    }

    pub fn filter_form(&self) -> FilterForm {
        self.filters.get()
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.filters.with(FilterForm::criteria)
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key.get()
    }

    pub fn filtered(&self) -> Vec<FinancialRecord> {
        self.filtered.get()
    }

    /// Filtered and sorted rows, in table order
    pub fn rows(&self) -> Vec<FinancialRecord> {
        self.rows.get()
    }

    /// Current table position of the `occurrence`-th row dated `date`
    pub fn row_position(&self, date: &str, occurrence: usize) -> Option<usize> {
        self.rows.with(|rows| row_position(rows, date, occurrence))
    }
}

impl Default for IncomeStatementStore {
    fn default() -> Self {
        Self::new()
    }
}
