use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; background-color: var(--bg-page);">
            <h1 style="font-size: 4rem; margin: 0; color: var(--brand-dark);">"404"</h1>
            <p style="color: var(--text-muted); margin: 0;">"Oops! Page not found"</p>
            <A href="/" attr:style="color: var(--brand-primary); font-weight: 600; text-decoration: none;">
                "Return to Home"
            </A>
        </div>
    }
}
