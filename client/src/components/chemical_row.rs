//! One chemical in a list: names, availability, mass, hazard, expiry and shelf.

#[cfg(test)]
#[path = "chemical_row_test.rs"]
mod chemical_row_test;

use inventory::input::format_mass;
use inventory::model::availability_label;
use inventory::{Chemical, InventoryRecord};
use leptos::prelude::*;

use crate::components::row_action::RowActionButton;
use crate::state::session::Role;

/// Title line: chemical name, with the brand in parentheses when known.
fn chemical_title(chemical: &Chemical) -> String {
    let brand = chemical.brand_name.trim();
    if brand.is_empty() {
        chemical.chemical_name.clone()
    } else {
        format!("{} ({brand})", chemical.chemical_name)
    }
}

/// `"Available | Mass: 12.50 | Flammable | Expires: 2026-01-31 | Shelf A"`;
/// unset fields are left out.
fn chemical_summary(chemical: &Chemical) -> String {
    let mut parts = vec![
        availability_label(chemical.is_available()).to_owned(),
        format!("Mass: {}", format_mass(chemical.mass)),
    ];
    if let Some(hazard) = chemical.hazard_type {
        parts.push(hazard.label().to_owned());
    }
    if let Some(date) = chemical.expiration_date {
        parts.push(format!("Expires: {date}"));
    }
    if let Some(location) = &chemical.location {
        parts.push(location.clone());
    }
    parts.join(" | ")
}

#[component]
pub fn ChemicalRow(
    chemical: Chemical,
    role: Role,
    #[prop(into)] deleting: Signal<bool>,
    on_edit: Callback<Chemical>,
) -> impl IntoView {
    let action = role.row_action(chemical.is_available());
    let title = chemical_title(&chemical);
    let summary = chemical_summary(&chemical);
    let on_edit_click = Callback::new(move |()| on_edit.run(chemical.clone()));

    view! {
        <li class="inventory-row" class=("inventory-row--deleting", move || deleting.get())>
            <div class="inventory-row__main">
                <span class="inventory-row__name">{title}</span>
                <span class="inventory-row__meta">{summary}</span>
            </div>
            <RowActionButton action=action on_edit=on_edit_click/>
        </li>
    }
}
