//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page sets the header title, creates the collection signal for its
//! resource and hands it to a list view in `components`.

pub mod chemicals;
pub mod materials;
pub mod users;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::Role;
use crate::state::ui::UiState;

/// Role for the route currently being rendered.
fn current_role() -> Role {
    Role::from_path(&use_location().pathname.get_untracked())
}

/// Publish `title` to the shell header.
fn set_header_title(title: &'static str) {
    if let Some(ui) = use_context::<RwSignal<UiState>>() {
        ui.update(|u| u.set_title(title));
    }
}
