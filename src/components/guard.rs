use leptos::*;
use leptos_router::{use_location, Redirect};

use crate::components::layout::DashboardLayout;
use crate::routes::{gate, AppRoute, Gate};
use crate::session::use_session;

/// Gates the whole protected subtree. Reactivity is tied to the session
/// flag only; the location read is untracked so that navigating between
/// protected pages does not rebuild the shell (which would reset the
/// sidebar and language state).
#[component]
pub fn ProtectedShell() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let allowed = move || {
        let route = AppRoute::from_path(&location.pathname.get_untracked());
        gate(route, session.is_authenticated()) == Gate::Allow
    };

    view! {
        <Show when=allowed fallback=|| view! { <Redirect path=AppRoute::Login.path()/> }>
            <DashboardLayout/>
        </Show>
    }
}
