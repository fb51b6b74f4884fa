//! Material modals: edit an existing record or create a new one.

use inventory::Material;
use leptos::prelude::*;

use crate::components::delete_confirm_dialog::DeleteConfirmDialog;
use crate::components::modal::{FormActions, ModalFrame, spawn_save, use_modal_keys};
use crate::net::api;
use crate::state::draft::MaterialDraft;
use crate::state::modal::ModalPhase;
use crate::util::modal_guard::restore_input;

/// Name and quantity inputs bound to a draft.
#[component]
fn MaterialInputs(draft: RwSignal<MaterialDraft>, phase: RwSignal<ModalPhase>) -> impl IntoView {
    let disabled = move || phase.get().inputs_disabled();
    view! {
        <label class="dialog__label">
            "Name"
            <input
                class="dialog__input"
                type="text"
                placeholder="Material Name"
                prop:value=move || draft.get().name
                prop:disabled=disabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.name = value);
                }
            />
        </label>
        <label class="dialog__label">
            "Quantity"
            <input
                class="dialog__input"
                type="text"
                inputmode="numeric"
                placeholder="Quantity"
                prop:value=move || draft.get().quantity_text
                prop:disabled=disabled
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    if draft.try_update(|d| d.input_quantity(&raw)) != Some(true) {
                        restore_input(&ev, &draft.get_untracked().quantity_text);
                    }
                }
            />
        </label>
    }
}

/// Edit modal bound to one material.
///
/// `on_saved` receives the committed record after a successful update;
/// `on_delete` receives the primary key once deletion is confirmed. The
/// parent unmounts the modal in `on_close`.
#[component]
pub fn EditMaterialModal(
    material: Material,
    on_close: Callback<()>,
    on_saved: Callback<Material>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let pk = material.id;
    let phase = RwSignal::new(ModalPhase::Editing);
    let draft = RwSignal::new(MaterialDraft::from_material(&material));

    let close = Callback::new(move |()| {
        phase.update(ModalPhase::close);
        on_close.run(());
    });

    let save = Callback::new(move |()| {
        if phase.get_untracked() != ModalPhase::Editing {
            return;
        }
        let fields = match draft.get_untracked().fields() {
            Ok(fields) => fields,
            Err(e) => {
                leptos::logging::warn!("material not saved: {e}");
                return;
            }
        };
        let committed = material.with_fields(fields.clone());
        spawn_save(phase, async move { api::update_material(pk, &fields).await }, move |_| {
            on_saved.run(committed);
            on_close.run(());
        });
    });

    let request_delete = Callback::new(move |()| {
        phase.update(|p| {
            p.request_delete();
        });
    });
    let cancel_delete = Callback::new(move |()| phase.update(ModalPhase::cancel_delete));
    let confirm_delete = Callback::new(move |()| {
        if phase.try_update(ModalPhase::confirm_delete) == Some(true) {
            on_delete.run(pk);
            on_close.run(());
        }
    });

    use_modal_keys(phase, close, save);

    view! {
        <ModalFrame title="Edit Material" on_close=close>
            <MaterialInputs draft=draft phase=phase/>
            <FormActions phase=phase on_cancel=close on_save=save on_delete=request_delete/>
        </ModalFrame>
        <Show when=move || phase.get().is_confirming_delete()>
            <DeleteConfirmDialog noun="material" on_cancel=cancel_delete on_confirm=confirm_delete/>
        </Show>
    }
}

/// Create modal for a new material. `on_created` receives the record the
/// server assigned.
#[component]
pub fn AddMaterialModal(on_close: Callback<()>, on_created: Callback<Material>) -> impl IntoView {
    let phase = RwSignal::new(ModalPhase::Editing);
    let draft = RwSignal::new(MaterialDraft::default());

    let close = Callback::new(move |()| {
        phase.update(ModalPhase::close);
        on_close.run(());
    });

    let save = Callback::new(move |()| {
        if phase.get_untracked() != ModalPhase::Editing {
            return;
        }
        let fields = match draft.get_untracked().fields() {
            Ok(fields) => fields,
            Err(e) => {
                leptos::logging::warn!("material not created: {e}");
                return;
            }
        };
        spawn_save(phase, async move { api::create_material(&fields).await }, move |created| {
            on_created.run(created);
            on_close.run(());
        });
    });

    use_modal_keys(phase, close, save);

    view! {
        <ModalFrame title="Add Material" on_close=close>
            <MaterialInputs draft=draft phase=phase/>
            <FormActions phase=phase on_cancel=close on_save=save/>
        </ModalFrame>
    }
}
