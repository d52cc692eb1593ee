use crate::domain::{income_statement::IncomeStatementRepository, logging::LogComponent};
use crate::store::IncomeStatementStore;
use crate::{log_debug, log_error, log_info};
use futures::future::{AbortHandle, Abortable};

/// Runs the one-shot load: `Idle -> Loading -> Ready | Stalled`.
///
/// Every failure class ends the same way: logged, and the view stays on its
/// loading indicator.
pub async fn load_income_statement<R: IncomeStatementRepository>(repository: &R, store: IncomeStatementStore) {
    store.begin_loading();
    match repository.fetch_annual().await {
        Ok(records) => {
            log_info!(LogComponent::Application("Loader"), "📊 Loaded {} fiscal periods", records.len());
            store.load_succeeded(records);
        }
        Err(error) => {
            log_error!(LogComponent::Application("Loader"), "❌ Error fetching data: {}", error);
            store.load_failed();
        }
    }
}

/// Wraps the load so it can be cancelled. An aborted load never touches the store.
pub fn abortable_load<R>(repository: R, store: IncomeStatementStore) -> (AbortHandle, impl Future<Output = ()>)
where
    R: IncomeStatementRepository + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        async move { load_income_statement(&repository, store).await },
        registration,
    );
    let task = async move {
        if task.await.is_err() {
            log_debug!(LogComponent::Application("Loader"), "🛑 Income statement request aborted before completion");
        }
    };
    (handle, task)
}

/// Spawns the load on the browser event loop; the view aborts it from `on_cleanup`.
pub fn spawn_income_statement_load<R>(repository: R, store: IncomeStatementStore) -> AbortHandle
where
    R: IncomeStatementRepository + 'static,
{
    let (handle, task) = abortable_load(repository, store);
    leptos::spawn_local(task);
    handle
}
