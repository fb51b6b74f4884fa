//! Chemical list with an optional hazard-class filter.

use inventory::{Chemical, HazardType};
use leptos::prelude::*;

use crate::components::chemical_form::{AddChemicalModal, EditChemicalModal};
use crate::components::chemical_row::ChemicalRow;
use crate::components::collection::{ListStatus, spawn_delete, spawn_refresh};
use crate::net::api;
use crate::state::draft::hazard_select_value;
use crate::state::inventory::{CollectionState, ListPhase};
use crate::state::session::Role;

fn refresh(state: RwSignal<CollectionState<Chemical>>, hazard: Option<HazardType>) {
    spawn_refresh(state, api::list_chemicals(hazard));
}

#[component]
pub fn ChemicalList(state: RwSignal<CollectionState<Chemical>>, role: Role) -> impl IntoView {
    let editing = RwSignal::new(None::<Chemical>);
    let adding = RwSignal::new(false);
    let hazard = RwSignal::new(None::<HazardType>);

    // Re-runs whenever the filter changes.
    Effect::new(move || refresh(state, hazard.get()));

    let refresh_current = move || refresh(state, hazard.get_untracked());
    let on_edit = Callback::new(move |chemical: Chemical| editing.set(Some(chemical)));
    let on_close_edit = Callback::new(move |()| editing.set(None));
    let on_close_add = Callback::new(move |()| adding.set(false));
    let on_changed = Callback::new(move |_: Chemical| refresh_current());
    let on_delete = Callback::new(move |pk: i64| {
        spawn_delete(state, pk, api::delete_chemical(pk), refresh_current);
    });

    let rows = move || {
        state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|chemical| {
                let id = chemical.id;
                view! {
                    <ChemicalRow
                        chemical=chemical
                        role=role
                        deleting=Signal::derive(move || state.with(|s| s.is_deleting(id)))
                        on_edit=on_edit
                    />
                }
            })
            .collect_view()
    };

    view! {
        <section class="inventory-list">
            <div class="inventory-list__toolbar">
                <label class="inventory-list__filter">
                    "Hazard"
                    <select
                        class="dialog__input"
                        prop:value=move || hazard_select_value(hazard.get())
                        on:change=move |ev| hazard.set(event_target_value(&ev).parse::<HazardType>().ok())
                    >
                        <option value="">"All hazards"</option>
                        {HazardType::ALL
                            .into_iter()
                            .map(|h| view! { <option value=h.label()>{h.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || role.can_create()>
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                        "Add Chemical"
                    </button>
                </Show>
            </div>
            <Show
                when=move || state.with(|s| s.phase() == ListPhase::Ready)
                fallback=move || {
                    if state.with(|s| s.phase() == ListPhase::Loading) {
                        view! { <ListStatus message="Loading chemicals..."/> }
                    } else {
                        view! { <ListStatus message="Chemicals are unavailable."/> }
                    }
                }
            >
                <Show
                    when=move || !state.with(CollectionState::is_empty)
                    fallback=|| view! { <ListStatus message="No chemicals found."/> }
                >
                    <ul class="inventory-list__rows">{rows}</ul>
                </Show>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|chemical| {
                        view! {
                            <EditChemicalModal
                                chemical=chemical
                                on_close=on_close_edit
                                on_saved=on_changed
                                on_delete=on_delete
                            />
                        }
                    })
            }}
            <Show when=move || adding.get()>
                <AddChemicalModal on_close=on_close_add on_created=on_changed/>
            </Show>
        </section>
    }
}
