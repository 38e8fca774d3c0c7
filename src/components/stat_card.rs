use leptos::*;

#[derive(Clone, Copy)]
pub struct Trend {
    /// Percentage change against the previous period.
    pub value: i32,
    pub positive: bool,
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] description: String,
    #[prop(optional)] trend: Option<Trend>,
) -> impl IntoView {
    let card_style = "
        background: var(--bg-surface);
        padding: 1.5rem;
        border-radius: var(--radius-lg);
        border: 1px solid var(--border-subtle);
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    ";

    let trend_chip = trend.map(|t| {
        let (arrow, color) = if t.positive {
            ("▲", "var(--indian-green)")
        } else {
            ("▼", "var(--indian-red)")
        };
        view! {
            <span style=format!("font-size: 0.85rem; font-weight: 600; color: {color};")>
                {format!("{arrow} {}%", t.value)}
            </span>
        }
    });

    view! {
        <div style=card_style>
            <h3 style="margin: 0; font-size: 0.9rem; font-weight: 600; color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.05em;">
                {title}
            </h3>
            <p style="margin: 0; font-size: 2rem; font-weight: 700; color: var(--brand-dark); line-height: 1.2;">
                {value}
            </p>
            <div style="display: flex; align-items: center; gap: 0.5rem;">
                {trend_chip}
                <span style="font-size: 0.85rem; color: var(--text-muted);">{description}</span>
            </div>
        </div>
    }
}
