use leptos::*;
use leptos_router::{use_location, A};

use crate::i18n::{chrome, use_language};
use crate::routes::AppRoute;

#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    let language = use_language();
    // Memo is Copy, so link_class can move into each link's class closure.
    let pathname = use_location().pathname;

    let panel_style = move || {
        if open.get() {
            "
            width: 250px;
            background-color: var(--bg-surface);
            border-right: 1px solid var(--border-subtle);
            height: 100vh;
            position: sticky;
            top: 0;
            display: flex;
            flex-direction: column;
            padding: 2rem 1rem;
            overflow: hidden;
            transition: width 0.2s ease;
            "
        } else {
            "
            width: 0;
            border-right: none;
            height: 100vh;
            position: sticky;
            top: 0;
            display: flex;
            flex-direction: column;
            padding: 2rem 0;
            overflow: hidden;
            transition: width 0.2s ease;
            "
        }
    };

    let link_class = move |route: AppRoute| {
        if pathname.get() == route.path() {
            "sidebar-link active"
        } else {
            "sidebar-link"
        }
    };

    let ul_style = "list-style-type: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.5rem;";

    view! {
        <aside style=panel_style>
            <div style="margin-bottom: 2rem; padding: 0 1rem;">
                <span style="font-family: var(--font-heading); font-weight: 700; font-size: 1.5rem; color: var(--brand-dark); white-space: nowrap;">
                    {move || chrome(language.get()).mall_name}
                </span>
            </div>
            <nav style="display: flex; flex-direction: column; gap: 0.5rem;">
                <ul style=ul_style>
                    <li>
                        <A href=AppRoute::Dashboard.path() class={move || link_class(AppRoute::Dashboard)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="7" height="7"></rect><rect x="14" y="3" width="7" height="7"></rect><rect x="14" y="14" width="7" height="7"></rect><rect x="3" y="14" width="7" height="7"></rect></svg>
                            {move || chrome(language.get()).dashboard}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Admin.path() class={move || link_class(AppRoute::Admin)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path><circle cx="9" cy="7" r="4"></circle><path d="M23 21v-2a4 4 0 0 0-3-3.87"></path><path d="M16 3.13a4 4 0 0 1 0 7.75"></path></svg>
                            {move || chrome(language.get()).admin}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Sales.path() class={move || link_class(AppRoute::Sales)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="23 6 13.5 15.5 8.5 10.5 1 18"></polyline><polyline points="17 6 23 6 23 12"></polyline></svg>
                            {move || chrome(language.get()).sales}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Inventory.path() class={move || link_class(AppRoute::Inventory)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27 6.96 12 12.01 20.73 6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line></svg>
                            {move || chrome(language.get()).inventory}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Purchase.path() class={move || link_class(AppRoute::Purchase)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"></path><line x1="3" y1="6" x2="21" y2="6"></line><path d="M16 10a4 4 0 0 1-8 0"></path></svg>
                            {move || chrome(language.get()).purchase}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Payment.path() class={move || link_class(AppRoute::Payment)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="1" y="4" width="22" height="16" rx="2" ry="2"></rect><line x1="1" y1="10" x2="23" y2="10"></line></svg>
                            {move || chrome(language.get()).payment}
                        </A>
                    </li>
                    <li>
                        <A href=AppRoute::Issues.path() class={move || link_class(AppRoute::Issues)}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line><line x1="12" y1="16" x2="12.01" y2="16"></line></svg>
                            {move || chrome(language.get()).issues}
                        </A>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
