//! The single action button at the end of an inventory row.

use leptos::prelude::*;

use crate::state::session::RowAction;

/// Renders `Edit` for admins or the cart placeholder for borrowers.
#[component]
pub fn RowActionButton(action: RowAction, on_edit: Callback<()>) -> impl IntoView {
    match action {
        RowAction::Edit => view! {
            <button class="btn inventory-row__action" on:click=move |_| on_edit.run(())>
                "Edit"
            </button>
        }
        .into_any(),
        RowAction::AddToCart { enabled } => view! {
            <button
                class="btn btn--primary inventory-row__action"
                disabled=!enabled
                on:click=move |_| leptos::logging::log!("cart is not available yet")
            >
                "Add to Cart"
            </button>
        }
        .into_any(),
    }
}
