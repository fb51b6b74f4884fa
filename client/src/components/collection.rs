//! Refresh and delete round-trips shared by the list views.
//!
//! Both helpers write to the collection with `try_update`, so a response that
//! lands after the page unmounted is dropped.

use std::future::Future;

use leptos::prelude::*;

use crate::state::inventory::CollectionState;

/// Re-issue a list call and replace the collection when it succeeds.
pub fn spawn_refresh<T, Fut>(state: RwSignal<CollectionState<T>>, request: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Option<Vec<T>>> + 'static,
{
    if state.try_update(CollectionState::begin_refresh).is_none() {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = request.await;
        let _ = state.try_update(|s| s.finish_refresh(result));
    });
}

/// Issue a delete for `pk`, mark it pending, and run `on_deleted` once the
/// server confirms so the caller can refresh.
pub fn spawn_delete<T, Fut, F>(state: RwSignal<CollectionState<T>>, pk: i64, request: Fut, on_deleted: F)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Option<serde_json::Value>> + 'static,
    F: FnOnce() + 'static,
{
    if state.try_update(|s| s.begin_delete(pk)).is_none() {
        return;
    }
    leptos::task::spawn_local(async move {
        let deleted = request.await.is_some();
        if state.try_update(|s| s.finish_delete(pk)).is_none() {
            return;
        }
        if deleted {
            on_deleted();
        } else {
            leptos::logging::warn!("delete of {pk} failed; list left unchanged");
        }
    });
}

/// Status line shown in place of rows.
#[component]
pub fn ListStatus(message: &'static str) -> impl IntoView {
    view! { <p class="inventory-list__status">{message}</p> }
}
