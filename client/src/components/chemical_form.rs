//! Chemical modals: edit an existing record or create a new one.

use inventory::{Chemical, HazardType};
use leptos::prelude::*;

use crate::components::delete_confirm_dialog::DeleteConfirmDialog;
use crate::components::modal::{FormActions, ModalFrame, spawn_save, use_modal_keys};
use crate::net::api;
use crate::state::draft::{ChemicalDraft, hazard_select_value};
use crate::state::modal::ModalPhase;
use crate::util::modal_guard::restore_input;

/// Every chemical input bound to a draft.
#[component]
fn ChemicalInputs(draft: RwSignal<ChemicalDraft>, phase: RwSignal<ModalPhase>) -> impl IntoView {
    let disabled = move || phase.get().inputs_disabled();
    view! {
        <label class="dialog__label">
            "Chemical Name"
            <input
                class="dialog__input"
                type="text"
                placeholder="Chemical Name"
                prop:value=move || draft.get().chemical_name
                prop:disabled=disabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.chemical_name = value);
                }
            />
        </label>
        <label class="dialog__label">
            "Brand Name"
            <input
                class="dialog__input"
                type="text"
                placeholder="Brand Name"
                prop:value=move || draft.get().brand_name
                prop:disabled=disabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.brand_name = value);
                }
            />
        </label>
        <label class="dialog__label">
            "Mass (g/ml)"
            <input
                class="dialog__input"
                type="text"
                inputmode="decimal"
                placeholder="Mass (g/ml)"
                prop:value=move || draft.get().mass_text
                prop:disabled=disabled
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    if draft.try_update(|d| d.input_mass(&raw)) != Some(true) {
                        restore_input(&ev, &draft.get_untracked().mass_text);
                    }
                }
            />
        </label>
        <label class="dialog__label">
            "Hazard Type"
            <select
                class="dialog__input"
                prop:value=move || hazard_select_value(draft.get().hazard_type)
                prop:disabled=disabled
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.select_hazard(&value));
                }
            >
                <option value="">"Select Hazard Type"</option>
                {HazardType::ALL
                    .into_iter()
                    .map(|hazard| {
                        view! {
                            <option
                                value=hazard.label()
                                selected=move || draft.get().hazard_type == Some(hazard)
                            >
                                {hazard.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <label class="dialog__label">
            "Expiration Date"
            <input
                class="dialog__input"
                type="date"
                prop:value=move || draft.get().expiration_date
                prop:disabled=disabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.expiration_date = value);
                }
            />
        </label>
        <label class="dialog__label">
            "Location"
            <input
                class="dialog__input"
                type="text"
                placeholder="Location"
                prop:value=move || draft.get().location
                prop:disabled=disabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.location = value);
                }
            />
        </label>
    }
}

/// Edit modal bound to one chemical.
///
/// `on_saved` receives the committed record after a successful update;
/// `on_delete` receives the primary key once deletion is confirmed.
#[component]
pub fn EditChemicalModal(
    chemical: Chemical,
    on_close: Callback<()>,
    on_saved: Callback<Chemical>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let pk = chemical.id;
    let phase = RwSignal::new(ModalPhase::Editing);
    let draft = RwSignal::new(ChemicalDraft::from_chemical(&chemical));

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
                leptos::logging::warn!("chemical not saved: {e}");
                return;
            }
        };
        let committed = chemical.with_fields(fields.clone());
        spawn_save(phase, async move { api::update_chemical(pk, &fields).await }, move |_| {
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
        <ModalFrame title="Edit Chemical" on_close=close>
            <ChemicalInputs draft=draft phase=phase/>
            <FormActions phase=phase on_cancel=close on_save=save on_delete=request_delete/>
        </ModalFrame>
        <Show when=move || phase.get().is_confirming_delete()>
            <DeleteConfirmDialog noun="chemical" on_cancel=cancel_delete on_confirm=confirm_delete/>
        </Show>
    }
}

/// Create modal for a new chemical.
#[component]
pub fn AddChemicalModal(on_close: Callback<()>, on_created: Callback<Chemical>) -> impl IntoView {
    let phase = RwSignal::new(ModalPhase::Editing);
    let draft = RwSignal::new(ChemicalDraft::default());

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
                leptos::logging::warn!("chemical not created: {e}");
                return;
            }
        };
        spawn_save(phase, async move { api::create_chemical(&fields).await }, move |created| {
            on_created.run(created);
            on_close.run(());
        });
    });

    use_modal_keys(phase, close, save);

    view! {
        <ModalFrame title="Add Chemical" on_close=close>
            <ChemicalInputs draft=draft phase=phase/>
            <FormActions phase=phase on_cancel=close on_save=save/>
        </ModalFrame>
    }
}
