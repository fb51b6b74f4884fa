//! Shared pieces of the edit/create modals: the dialog frame, the keyboard
//! contract and the save round-trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every modal owns a `RwSignal<ModalPhase>` and a draft signal. Those
//! signals are disposed when the parent unmounts the modal, which is how a
//! save that resolves after the modal closed gets dropped: the `try_*`
//! accessors return `None` and nothing reaches the parent.

use std::future::Future;

use leptos::prelude::*;

use crate::state::modal::{KeyAction, KeyTarget, ModalPhase};
use crate::util::modal_guard::use_modal_guard;

/// Backdrop plus centered dialog. Clicking the backdrop closes.
#[component]
pub fn ModalFrame(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}

/// Hold the scroll lock and route Escape/Enter through `phase` for as long
/// as the calling modal is mounted.
pub fn use_modal_keys(phase: RwSignal<ModalPhase>, close: Callback<()>, save: Callback<()>) {
    use_modal_guard(Callback::new(move |(key, target): (String, KeyTarget)| {
        let Some(current) = phase.try_get_untracked() else {
            return false;
        };
        match current.key_action(&key, target) {
            Some(KeyAction::Close) => close.run(()),
            Some(KeyAction::Save) => save.run(()),
            None => return false,
        }
        true
    }));
}

/// Move `phase` to Saving and run `request`. On success the phase closes and
/// `on_success` runs; on failure the modal returns to Editing. Does nothing
/// unless the modal is in Editing.
pub fn spawn_save<T, Fut, F>(phase: RwSignal<ModalPhase>, request: Fut, on_success: F)
where
    T: 'static,
    Fut: Future<Output = Option<T>> + 'static,
    F: FnOnce(T) + 'static,
{
    if phase.try_update(ModalPhase::submit) != Some(true) {
        return;
    }
    leptos::task::spawn_local(async move {
        match request.await {
            Some(value) => {
                if phase.try_update(ModalPhase::save_succeeded) == Some(true) {
                    on_success(value);
                }
            }
            None => {
                let _ = phase.try_update(ModalPhase::save_failed);
            }
        }
    });
}

/// Primary/secondary buttons at the bottom of a form modal.
#[component]
pub fn FormActions(
    phase: RwSignal<ModalPhase>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let disabled = move || phase.get().inputs_disabled();
    view! {
        <div class="dialog__actions">
            {on_delete
                .map(|on_delete| {
                    view! {
                        <button
                            class="btn btn--danger dialog__actions-start"
                            prop:disabled=disabled
                            on:click=move |_| on_delete.run(())
                        >
                            "Delete"
                        </button>
                    }
                })}
            <button class="btn" prop:disabled=disabled on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button class="btn btn--primary" prop:disabled=disabled on:click=move |_| on_save.run(())>
                {move || phase.get().save_label()}
            </button>
        </div>
    }
}
