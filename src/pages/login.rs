use leptos::*;
use leptos_router::Redirect;

use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::toast::use_toaster;
use crate::routes::{gate, AppRoute, Gate};
use crate::session::use_session;

/// The only public form. Sits outside the navigation shell, so it renders
/// in English regardless of the language flag the shell owns.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match gate(Some(AppRoute::Login), session.is_authenticated()) {
            Gate::ToDashboard => view! { <Redirect path=AppRoute::Dashboard.path()/> }.into_view(),
            _ => view! { <LoginCard/> }.into_view(),
        }}
    }
}

#[component]
fn LoginCard() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |_| {
        let candidate = password.get_untracked();
        if !session.login(&candidate) {
            toaster.error(
                "Authentication failed",
                "The password you entered is incorrect.",
            );
        }
    };

    let page_style = "
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background-color: var(--bg-page);
    ";

    let card_style = "
        width: 100%;
        max-width: 420px;
        margin: 1rem;
        padding: 2rem;
        background: var(--bg-surface);
        border-radius: var(--radius-lg);
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    ";

    view! {
        <div style=page_style>
            <div style=card_style>
                <div style="text-align: center;">
                    <h1 style="font-family: var(--font-heading); color: var(--brand-dark); font-size: 1.75rem; margin: 0;">
                        "Mall Magic System"
                    </h1>
                    <p style="color: var(--text-muted); margin: 0.5rem 0 0 0;">
                        "Enter your password to access the preview"
                    </p>
                </div>

                <Input
                    label="Password"
                    type_="password"
                    placeholder="Enter password"
                    value=password
                    set_value=set_password
                />

                <Button on_click=on_submit type_="submit">"Login"</Button>

                <p style="font-size: 0.75rem; text-align: center; color: var(--text-muted); margin: 0;">
                    "This is a private preview. Unauthorized access is prohibited."
                </p>
            </div>
        </div>
    }
}
