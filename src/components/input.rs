use leptos::event_target_value;
use leptos::*;

#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] type_: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] set_value: WriteSignal<String>,
) -> impl IntoView {
    let container_style = "display: flex; flex-direction: column; gap: 0.5rem; width: 100%;";
    let label_style = "font-weight: 500; font-size: 0.9rem; color: var(--text-muted);";

    view! {
        <label style=container_style>
            <span style=label_style>{label}</span>
            <input
                type=type_
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                style="width: 100%;"
            />
        </label>
    }
}

/// Search box used at the top of every table page.
#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            style="width: 100%; max-width: 320px;"
        />
    }
}
