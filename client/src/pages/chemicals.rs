//! Chemicals page, shared by the borrower and admin routes.

use inventory::Chemical;
use leptos::prelude::*;

use crate::components::chemical_list::ChemicalList;
use crate::state::inventory::CollectionState;

#[component]
pub fn ChemicalsPage() -> impl IntoView {
    super::set_header_title("Chemicals");
    let role = super::current_role();
    let state = RwSignal::new(CollectionState::<Chemical>::default());

    view! {
        <div class="page page--chemicals">
            <ChemicalList state=state role=role/>
        </div>
    }
}
