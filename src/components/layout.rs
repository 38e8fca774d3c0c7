use leptos::*;
use leptos_router::Outlet;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::i18n::provide_language;

/// The navigation shell around every protected page: collapsible sidebar,
/// header bar, routed content. Owns the two pieces of ephemeral UI state
/// (sidebar visibility and display language), both reset on reload.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    provide_language();
    let (sidebar_open, set_sidebar_open) = create_signal(true);

    let layout_style = "
        min-height: 100vh;
        display: flex;
        background-color: var(--bg-page);
    ";

    let main_style = "
        display: flex;
        flex-direction: column;
        flex: 1;
        width: 100%;
        min-width: 0;
    ";

    let content_style = "
        width: 100%;
        padding: 2rem;
        flex: 1;
        overflow-x: auto;
    ";

    view! {
        <div style=layout_style>
            <Sidebar open=sidebar_open/>
            <div style=main_style>
                <Header on_toggle_sidebar=move |_| set_sidebar_open.update(|open| *open = !*open)/>
                <main style=content_style>
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
