//! One material in a list: name, availability, quantity and a role action.

#[cfg(test)]
#[path = "material_row_test.rs"]
mod material_row_test;

use inventory::model::availability_label;
use inventory::{InventoryRecord, Material};
use leptos::prelude::*;

use crate::components::row_action::RowActionButton;
use crate::state::session::Role;

/// `"Available | Quantity: 5"`.
fn material_summary(material: &Material) -> String {
    format!("{} | Quantity: {}", availability_label(material.is_available()), material.quantity)
}

#[component]
pub fn MaterialRow(
    material: Material,
    role: Role,
    #[prop(into)] deleting: Signal<bool>,
    on_edit: Callback<Material>,
) -> impl IntoView {
    let action = role.row_action(material.is_available());
    let summary = material_summary(&material);
    let name = material.name.clone();
    let on_edit_click = Callback::new(move |()| on_edit.run(material.clone()));

    view! {
        <li class="inventory-row" class=("inventory-row--deleting", move || deleting.get())>
            <div class="inventory-row__main">
                <span class="inventory-row__name">{name}</span>
                <span class="inventory-row__meta">{summary}</span>
            </div>
            <RowActionButton action=action on_edit=on_edit_click/>
        </li>
    }
}
