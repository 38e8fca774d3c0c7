use leptos::*;

#[component]
pub fn Button(
    children: Children,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] disabled: bool,
    #[prop(default = "button")] type_: &'static str,
) -> impl IntoView {
    let base_style = "
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        font-size: 1rem;
        border-radius: var(--radius-md);
        border: none;
        cursor: pointer;
        background-color: var(--brand-dark);
        color: #ffffff;
        transition: opacity 0.2s ease;
    ";

    view! {
        <button
            type=type_
            class=format!("btn {}", class)
            style=base_style
            disabled=disabled
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
