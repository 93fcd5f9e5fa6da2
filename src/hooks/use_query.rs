// ============================================================================
// USE QUERY HOOK - Async fetch with loading/error state and manual reload
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::services::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

#[derive(Clone)]
pub struct QueryHandle<T> {
    pub state: UseStateHandle<QueryState<T>>,
    /// Re-run the fetch (after a mutation, or a retry button)
    pub reload: Callback<()>,
}

/// Run `fetch(deps)` on mount, whenever `deps` change, and on `reload`.
/// A response arriving after the deps moved on is dropped.
#[hook]
pub fn use_query<T, D, F, Fut>(deps: D, fetch: F) -> QueryHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| QueryState::Loading);
    let version = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with((deps, *version), move |(deps, _)| {
            let live = Rc::new(Cell::new(true));
            state.set(QueryState::Loading);
            let future = fetch(deps.clone());
            {
                let live = live.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = future.await;
                    if !live.get() {
                        return;
                    }
                    match result {
                        Ok(value) => state.set(QueryState::Ready(value)),
                        Err(e) => {
                            log::warn!("❌ [QUERY] {}", e);
                            state.set(QueryState::Failed(e));
                        }
                    }
                });
            }
            move || live.set(false)
        });
    }

    let reload = {
        let version = version.clone();
        Callback::from(move |_| version.set(version.wrapping_add(1)))
    };

    QueryHandle { state, reload }
}
