//! Material list: fetch on mount, render rows, host the modals, and refresh
//! after every mutation.

use inventory::Material;
use leptos::prelude::*;

use crate::components::collection::{ListStatus, spawn_delete, spawn_refresh};
use crate::components::material_form::{AddMaterialModal, EditMaterialModal};
use crate::components::material_row::MaterialRow;
use crate::net::api;
use crate::state::inventory::{CollectionState, ListPhase};
use crate::state::session::Role;

fn refresh(state: RwSignal<CollectionState<Material>>) {
    spawn_refresh(state, api::list_materials());
}

#[component]
pub fn MaterialList(state: RwSignal<CollectionState<Material>>, role: Role) -> impl IntoView {
    let editing = RwSignal::new(None::<Material>);
    let adding = RwSignal::new(false);

    // Effects only run in the browser, so the initial fetch never happens
    // during SSR.
    Effect::new(move || refresh(state));

    let on_edit = Callback::new(move |material: Material| editing.set(Some(material)));
    let on_close_edit = Callback::new(move |()| editing.set(None));
    let on_close_add = Callback::new(move |()| adding.set(false));
    let on_changed = Callback::new(move |_: Material| refresh(state));
    let on_delete = Callback::new(move |pk: i64| {
        spawn_delete(state, pk, api::delete_material(pk), move || refresh(state));
    });

    let rows = move || {
        state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|material| {
                let id = material.id;
                view! {
                    <MaterialRow
                        material=material
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
            <Show when=move || role.can_create()>
                <div class="inventory-list__toolbar">
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                        "Add Material"
                    </button>
                </div>
            </Show>
            <Show
                when=move || state.with(|s| s.phase() == ListPhase::Ready)
                fallback=move || {
                    if state.with(|s| s.phase() == ListPhase::Loading) {
                        view! { <ListStatus message="Loading materials..."/> }
                    } else {
                        view! { <ListStatus message="Materials are unavailable."/> }
                    }
                }
            >
                <Show
                    when=move || !state.with(CollectionState::is_empty)
                    fallback=|| view! { <ListStatus message="No materials found."/> }
                >
                    <ul class="inventory-list__rows">{rows}</ul>
                </Show>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|material| {
                        view! {
                            <EditMaterialModal
                                material=material
                                on_close=on_close_edit
                                on_saved=on_changed
                                on_delete=on_delete
                            />
                        }
                    })
            }}
            <Show when=move || adding.get()>
                <AddMaterialModal on_close=on_close_add on_created=on_changed/>
            </Show>
        </section>
    }
}
