//! Second confirmation before a record is deleted.

use leptos::prelude::*;

/// Stacked over the edit modal while it is in `ConfirmingDelete`.
#[component]
pub fn DeleteConfirmDialog(noun: &'static str, on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop dialog-backdrop--stacked" on:click=move |ev| ev.stop_propagation()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirm Deletion"</h2>
                <p class="dialog__danger">{format!("Are you sure you want to delete this {noun}?")}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
