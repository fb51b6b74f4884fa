//! Root application component with routing, layout and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{chemicals::ChemicalsPage, materials::MaterialsPage, users::UsersPage};
use crate::state::session::Role;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shell `UiState` and sets up client-side routing. Borrower
/// and admin routes render the same pages; the role comes from the path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/stockroom.css"/>
        <Title text="Stockroom"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <Header/>
                    <main class="layout__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=MaterialsPage/>
                            <Route path=StaticSegment("materials") view=MaterialsPage/>
                            <Route path=StaticSegment("chemicals") view=ChemicalsPage/>
                            <Route path=(StaticSegment("admin"), StaticSegment("materials")) view=MaterialsPage/>
                            <Route path=(StaticSegment("admin"), StaticSegment("chemicals")) view=ChemicalsPage/>
                            <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Navigation for the current role.
#[component]
fn Sidebar() -> impl IntoView {
    let location = use_location();
    let role = Memo::new(move |_| Role::from_path(&location.pathname.get()));

    view! {
        <nav class="sidebar">
            <span class="sidebar__brand">"Stockroom"</span>
            <ul class="sidebar__links">
                {move || {
                    role.get()
                        .menu()
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <A href=link.href>{link.label}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <span class="sidebar__role">{move || role.get().label()}</span>
        </nav>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <header class="layout__header toolbar">
            <h1 class="toolbar__title">{move || ui.get().header_title}</h1>
        </header>
    }
}
