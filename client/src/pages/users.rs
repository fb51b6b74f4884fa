//! Admin users page: account listing plus borrower registration.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use inventory::User;
use leptos::prelude::*;

use crate::components::add_borrower_dialog::AddBorrowerDialog;
use crate::components::collection::{ListStatus, spawn_refresh};
use crate::net::api;
use crate::state::inventory::{CollectionState, ListPhase};

/// `"ada@lab.org | ada | admin"`; unset fields are left out.
fn user_summary(user: &User) -> String {
    [&user.email, &user.username, &user.user_type]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn refresh(state: RwSignal<CollectionState<User>>) {
    spawn_refresh(state, api::list_users());
}

#[component]
pub fn UsersPage() -> impl IntoView {
    super::set_header_title("Users");
    let state = RwSignal::new(CollectionState::<User>::default());
    let adding = RwSignal::new(false);

    Effect::new(move || refresh(state));

    let on_close = Callback::new(move |()| adding.set(false));
    let on_created = Callback::new(move |()| refresh(state));

    let rows = move || {
        state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|user| {
                view! {
                    <li class="inventory-row">
                        <div class="inventory-row__main">
                            <span class="inventory-row__name">{user.display_name()}</span>
                            <span class="inventory-row__meta">{user_summary(&user)}</span>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page page--users">
            <section class="inventory-list">
                <div class="inventory-list__toolbar">
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                        "Add Borrower"
                    </button>
                </div>
                <Show
                    when=move || state.with(|s| s.phase() == ListPhase::Ready)
                    fallback=move || {
                        if state.with(|s| s.phase() == ListPhase::Loading) {
                            view! { <ListStatus message="Loading users..."/> }
                        } else {
                            view! { <ListStatus message="Users are unavailable."/> }
                        }
                    }
                >
                    <Show
                        when=move || !state.with(CollectionState::is_empty)
                        fallback=|| view! { <ListStatus message="No users found."/> }
                    >
                        <ul class="inventory-list__rows">{rows}</ul>
                    </Show>
                </Show>
            </section>
            <Show when=move || adding.get()>
                <AddBorrowerDialog on_close=on_close on_created=on_created/>
            </Show>
        </div>
    }
}
