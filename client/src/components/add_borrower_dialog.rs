//! Dialog for registering a borrower account.

use inventory::NewBorrower;
use leptos::prelude::*;

use crate::components::modal::{FormActions, ModalFrame, spawn_save, use_modal_keys};
use crate::net::api;
use crate::state::modal::ModalPhase;

#[component]
fn TextField(
    label: &'static str,
    draft: RwSignal<NewBorrower>,
    phase: RwSignal<ModalPhase>,
    get: fn(&NewBorrower) -> String,
    set: fn(&mut NewBorrower, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                placeholder=label
                prop:value=move || get(&draft.get())
                prop:disabled=move || phase.get().inputs_disabled()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        </label>
    }
}

/// All three fields are required; `on_created` runs after the server accepts
/// the account.
#[component]
pub fn AddBorrowerDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let phase = RwSignal::new(ModalPhase::Editing);
    let draft = RwSignal::new(NewBorrower::default());

    let close = Callback::new(move |()| {
        phase.update(ModalPhase::close);
        on_close.run(());
    });

    let save = Callback::new(move |()| {
        if phase.get_untracked() != ModalPhase::Editing {
            return;
        }
        let borrower = match draft.get_untracked().validated() {
            Ok(borrower) => borrower,
            Err(e) => {
                leptos::logging::warn!("borrower not created: {e}");
                return;
            }
        };
        spawn_save(phase, async move { api::create_borrower(&borrower).await }, move |_| {
            on_created.run(());
            on_close.run(());
        });
    });

    use_modal_keys(phase, close, save);

    view! {
        <ModalFrame title="Add Borrower" on_close=close>
            <TextField label="Name" draft=draft phase=phase get=|d| d.name.clone() set=|d, v| d.name = v/>
            <TextField label="Email" draft=draft phase=phase get=|d| d.email.clone() set=|d, v| d.email = v/>
            <TextField
                label="Username"
                draft=draft
                phase=phase
                get=|d| d.username.clone()
                set=|d, v| d.username = v
            />
            <FormActions phase=phase on_cancel=close on_save=save/>
        </ModalFrame>
    }
}
