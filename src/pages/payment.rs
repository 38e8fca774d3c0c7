use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::i18n::{use_language, Language};
use crate::models::{Gateway, Payment, PaymentStatus};
use crate::utils::{format_inr, matches_query};

struct Text {
    title: &'static str,
    subtitle: &'static str,
    search: &'static str,
    record_payment: &'static str,
    id: &'static str,
    tenant: &'static str,
    amount: &'static str,
    gateway: &'static str,
    date: &'static str,
    status: &'static str,
    actions: &'static str,
    completed: &'static str,
    pending: &'static str,
    failed: &'static str,
}

const EN: Text = Text {
    title: "Payment Module",
    subtitle: "Track tenant payments and gateway settlements",
    search: "Search payments...",
    record_payment: "Record Payment",
    id: "Payment ID",
    tenant: "Tenant",
    amount: "Amount",
    gateway: "Gateway",
    date: "Date",
    status: "Status",
    actions: "Actions",
    completed: "Completed",
    pending: "Pending",
    failed: "Failed",
};

const HI: Text = Text {
    title: "भुगतान मॉड्यूल",
    subtitle: "किरायेदार भुगतान और गेटवे निपटान ट्रैक करें",
    search: "भुगतान खोजें...",
    record_payment: "भुगतान दर्ज करें",
    id: "भुगतान आईडी",
    tenant: "किरायेदार",
    amount: "राशि",
    gateway: "गेटवे",
    date: "तारीख",
    status: "स्थिति",
    actions: "क्रियाएं",
    completed: "पूरा हुआ",
    pending: "लंबित",
    failed: "विफल",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const PAYMENTS: &[Payment] = &[
    Payment { id: "PAY-2024-001", tenant: "Chennai Silks", amount: 1_25_000, gateway: Gateway::Razorpay, date: "2024-06-01", status: PaymentStatus::Completed },
    Payment { id: "PAY-2024-002", tenant: "Bombay Electronics", amount: 1_80_000, gateway: Gateway::Paytm, date: "2024-06-01", status: PaymentStatus::Completed },
    Payment { id: "PAY-2024-003", tenant: "Delhi Sweets", amount: 95_000, gateway: Gateway::PhonePe, date: "2024-06-02", status: PaymentStatus::Pending },
    Payment { id: "PAY-2024-004", tenant: "Mumbai Fashion", amount: 1_40_000, gateway: Gateway::Upi, date: "2024-06-03", status: PaymentStatus::Failed },
    Payment { id: "PAY-2024-005", tenant: "Kolkata Books", amount: 72_000, gateway: Gateway::Razorpay, date: "2024-06-03", status: PaymentStatus::Completed },
    Payment { id: "PAY-2024-006", tenant: "Bangalore Tech", amount: 1_65_000, gateway: Gateway::Paytm, date: "2024-06-04", status: PaymentStatus::Pending },
];

fn status_label(t: &'static Text, status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Completed => t.completed,
        PaymentStatus::Pending => t.pending,
        PaymentStatus::Failed => t.failed,
    }
}

fn status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Completed => "badge badge-green",
        PaymentStatus::Pending => "badge badge-orange",
        PaymentStatus::Failed => "badge badge-red",
    }
}

fn filtered(query: &str) -> Vec<Payment> {
    PAYMENTS
        .iter()
        .copied()
        .filter(|p| {
            matches_query(
                &[p.id, p.tenant, p.gateway.as_str(), p.date, p.status.as_str()],
                query,
            )
        })
        .collect()
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let language = use_language();
    let (query, set_query) = create_signal(String::new());

    view! {
        {move || {
            let t = text(language.get());
            view! {
                <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                    <div style="display: flex; align-items: center; gap: 1rem; flex-wrap: wrap;">
                        <div style="margin-right: auto;">
                            <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin: 0;">{t.title}</h1>
                            <p style="color: var(--text-muted); margin: 0.5rem 0 0 0;">{t.subtitle}</p>
                        </div>
                        <button class="btn-primary">{t.record_payment}</button>
                    </div>

                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                        <div style="padding: 1.5rem;">
                            <SearchBox placeholder=t.search value=query set_value=set_query/>
                        </div>
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: var(--bg-subtle); text-align: left;">
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.id}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.tenant}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.amount}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.gateway}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.date}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.actions}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|p| p.id
                                        children=move |p| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{p.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{p.tenant}</td>
                                                <td style="padding: 1rem;">{format_inr(p.amount)}</td>
                                                <td style="padding: 1rem;">{p.gateway.as_str()}</td>
                                                <td style="padding: 1rem;">{p.date}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(p.status)>{status_label(t, p.status)}</span>
                                                </td>
                                                <td style="padding: 1rem;">
                                                    <RowActions/>
                                                </td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            }
        }}
    }
}
