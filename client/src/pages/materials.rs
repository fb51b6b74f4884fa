//! Materials page, shared by the borrower and admin routes.

use inventory::Material;
use leptos::prelude::*;

use crate::components::material_list::MaterialList;
use crate::state::inventory::CollectionState;

#[component]
pub fn MaterialsPage() -> impl IntoView {
    super::set_header_title("Materials");
    let role = super::current_role();
    let state = RwSignal::new(CollectionState::<Material>::default());

    view! {
        <div class="page page--materials">
            <MaterialList state=state role=role/>
        </div>
    }
}
