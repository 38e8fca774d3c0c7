use leptos::*;

use crate::i18n::{chrome, use_language};
use crate::session::use_session;

#[component]
pub fn Header(
    #[prop(into)] on_toggle_sidebar: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    let language = use_language();
    let session = use_session();

    let header_style = "
        width: 100%;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        gap: 1rem;
        background-color: var(--bg-surface);
        border-bottom: 1px solid var(--border-subtle);
    ";

    view! {
        <header style=header_style>
            <button
                class="icon-button"
                aria-label="Toggle sidebar"
                on:click=move |ev| on_toggle_sidebar.call(ev)
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="3" y1="12" x2="21" y2="12"></line><line x1="3" y1="6" x2="21" y2="6"></line><line x1="3" y1="18" x2="21" y2="18"></line></svg>
            </button>

            <span style="font-family: var(--font-heading); font-weight: 700; font-size: 1.25rem; color: var(--brand-dark);">
                {move || chrome(language.get()).mall_name}
            </span>

            <div style="margin-left: auto; display: flex; align-items: center; gap: 0.75rem;">
                <button
                    class="icon-button"
                    on:click=move |_| language.update(|lang| *lang = lang.toggled())
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><line x1="2" y1="12" x2="22" y2="12"></line><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path></svg>
                    <span style="margin-left: 0.4rem;">{move || chrome(language.get()).switch_language}</span>
                </button>
                <button
                    class="icon-button"
                    on:click=move |_| session.logout()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"></path><polyline points="16 17 21 12 16 7"></polyline><line x1="21" y1="12" x2="9" y2="12"></line></svg>
                    <span style="margin-left: 0.4rem;">{move || chrome(language.get()).logout}</span>
                </button>
            </div>
        </header>
    }
}
