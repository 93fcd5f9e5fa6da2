// ============================================================================
// USE SESSION HOOK - Re-render on Token Store changes
// ============================================================================

use yew::prelude::*;

use crate::models::Session;
use crate::state::TokenStore;

use super::use_api;

/// Current session; the component re-renders on login, refresh and logout
#[hook]
pub fn use_session() -> Session {
    let store = use_api().session.clone();
    let session = use_state(|| store.snapshot());

    {
        let session = session.clone();
        use_effect_with(store, move |store: &TokenStore| {
            let store = store.clone();
            let id = store.subscribe(move |next| session.set(next.clone()));
            move || store.unsubscribe(id)
        });
    }

    (*session).clone()
}
