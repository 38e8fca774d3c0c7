use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::i18n::{use_language, Language};
use crate::models::{PaymentMethod, Transaction, TransactionStatus};
use crate::utils::{format_inr, matches_query};

struct Text {
    title: &'static str,
    subtitle: &'static str,
    search: &'static str,
    new_sale: &'static str,
    id: &'static str,
    store: &'static str,
    amount: &'static str,
    gst: &'static str,
    method: &'static str,
    date: &'static str,
    status: &'static str,
    actions: &'static str,
    completed: &'static str,
    pending: &'static str,
    refunded: &'static str,
}

const EN: Text = Text {
    title: "Sales Module",
    subtitle: "Track sales transactions across all mall stores",
    search: "Search transactions...",
    new_sale: "New Sale",
    id: "Transaction ID",
    store: "Store",
    amount: "Amount",
    gst: "GST",
    method: "Payment Method",
    date: "Date",
    status: "Status",
    actions: "Actions",
    completed: "Completed",
    pending: "Pending",
    refunded: "Refunded",
};

const HI: Text = Text {
    title: "बिक्री मॉड्यूल",
    subtitle: "सभी मॉल स्टोर की बिक्री लेन-देन ट्रैक करें",
    search: "लेन-देन खोजें...",
    new_sale: "नई बिक्री",
    id: "लेन-देन आईडी",
    store: "दुकान",
    amount: "राशि",
    gst: "जीएसटी",
    method: "भुगतान विधि",
    date: "तारीख",
    status: "स्थिति",
    actions: "क्रियाएं",
    completed: "पूरा हुआ",
    pending: "लंबित",
    refunded: "वापस किया गया",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

// GST figures are captured at billing time; nothing here recomputes tax.
const TRANSACTIONS: &[Transaction] = &[
    Transaction { id: "TXN-2024-101", store: "Chennai Silks", amount: 45_600, gst: 6_956, method: PaymentMethod::Upi, date: "2024-06-10", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-102", store: "Bombay Electronics", amount: 1_24_999, gst: 19_068, method: PaymentMethod::Card, date: "2024-06-10", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-103", store: "Delhi Sweets", amount: 2_450, gst: 117, method: PaymentMethod::Cash, date: "2024-06-11", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-104", store: "Mumbai Fashion", amount: 18_750, gst: 2_861, method: PaymentMethod::Upi, date: "2024-06-11", status: TransactionStatus::Refunded },
    Transaction { id: "TXN-2024-105", store: "Kolkata Books", amount: 3_280, gst: 156, method: PaymentMethod::Card, date: "2024-06-12", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-106", store: "Bangalore Tech", amount: 89_990, gst: 13_727, method: PaymentMethod::NetBanking, date: "2024-06-12", status: TransactionStatus::Pending },
    Transaction { id: "TXN-2024-107", store: "Chennai Silks", amount: 12_999, gst: 1_983, method: PaymentMethod::Upi, date: "2024-06-13", status: TransactionStatus::Completed },
];

fn status_label(t: &'static Text, status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => t.completed,
        TransactionStatus::Pending => t.pending,
        TransactionStatus::Refunded => t.refunded,
    }
}

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "badge badge-green",
        TransactionStatus::Pending => "badge badge-orange",
        TransactionStatus::Refunded => "badge badge-red",
    }
}

fn filtered(query: &str) -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .copied()
        .filter(|txn| {
            matches_query(
                &[txn.id, txn.store, txn.method.as_str(), txn.date, txn.status.as_str()],
                query,
            )
        })
        .collect()
}

#[component]
pub fn SalesPage() -> impl IntoView {
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
                        <button class="btn-primary">{t.new_sale}</button>
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
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.store}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.amount}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.gst}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.method}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.date}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.actions}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|txn| txn.id
                                        children=move |txn| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{txn.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{txn.store}</td>
                                                <td style="padding: 1rem;">{format_inr(txn.amount)}</td>
                                                <td style="padding: 1rem; color: var(--text-muted);">{format_inr(txn.gst)}</td>
                                                <td style="padding: 1rem;">{txn.method.as_str()}</td>
                                                <td style="padding: 1rem;">{txn.date}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(txn.status)>{status_label(t, txn.status)}</span>
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
