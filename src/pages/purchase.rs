use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::components::stat_card::StatCard;
use crate::i18n::{use_language, Language};
use crate::models::{OrderStatus, PurchaseOrder};
use crate::utils::{format_inr, group_indian, matches_query};

struct Text {
    title: &'static str,
    subtitle: &'static str,
    search: &'static str,
    new_purchase: &'static str,
    total_purchases: &'static str,
    pending_orders: &'static str,
    this_month: &'static str,
    amount: &'static str,
    order_id: &'static str,
    vendor: &'static str,
    date: &'static str,
    items: &'static str,
    value: &'static str,
    status: &'static str,
    action: &'static str,
    completed: &'static str,
    pending: &'static str,
    processing: &'static str,
}

const EN: Text = Text {
    title: "Purchase Management",
    subtitle: "Track and manage all your mall purchases",
    search: "Search purchases...",
    new_purchase: "New Purchase",
    total_purchases: "Total Purchases",
    pending_orders: "Pending Orders",
    this_month: "This Month",
    amount: "Total Amount",
    order_id: "Order ID",
    vendor: "Vendor",
    date: "Date",
    items: "Items",
    value: "Value",
    status: "Status",
    action: "Action",
    completed: "Completed",
    pending: "Pending",
    processing: "Processing",
};

const HI: Text = Text {
    title: "खरीद प्रबंधन",
    subtitle: "अपने सभी मॉल की खरीदारी को ट्रैक करें और प्रबंधित करें",
    search: "खरीदारी खोजें...",
    new_purchase: "नई खरीद",
    total_purchases: "कुल खरीदारी",
    pending_orders: "लंबित आदेश",
    this_month: "इस महीने",
    amount: "कुल राशि",
    order_id: "आदेश आईडी",
    vendor: "विक्रेता",
    date: "तारीख",
    items: "आइटम",
    value: "मूल्य",
    status: "स्थिति",
    action: "कार्रवाई",
    completed: "पूरा हुआ",
    pending: "लंबित",
    processing: "प्रसंस्करण",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const ORDERS: &[PurchaseOrder] = &[
    PurchaseOrder { id: "PO-2023-001", vendor: "ABC Supplies", date: "2023-03-10", items: 24, value: 1_45_000, status: OrderStatus::Completed },
    PurchaseOrder { id: "PO-2023-002", vendor: "XYZ Distributors", date: "2023-03-15", items: 12, value: 85_000, status: OrderStatus::Pending },
    PurchaseOrder { id: "PO-2023-003", vendor: "Global Imports", date: "2023-03-18", items: 8, value: 1_20_000, status: OrderStatus::Processing },
    PurchaseOrder { id: "PO-2023-004", vendor: "Metro Suppliers", date: "2023-03-22", items: 16, value: 75_000, status: OrderStatus::Completed },
    PurchaseOrder { id: "PO-2023-005", vendor: "City Wholesalers", date: "2023-03-25", items: 32, value: 2_25_000, status: OrderStatus::Pending },
];

fn status_label(t: &'static Text, status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => t.completed,
        OrderStatus::Pending => t.pending,
        OrderStatus::Processing => t.processing,
    }
}

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "badge badge-green",
        OrderStatus::Pending => "badge badge-orange",
        OrderStatus::Processing => "badge badge-blue",
    }
}

fn filtered(query: &str) -> Vec<PurchaseOrder> {
    ORDERS
        .iter()
        .copied()
        .filter(|po| matches_query(&[po.id, po.vendor, po.date, po.status.as_str()], query))
        .collect()
}

#[component]
pub fn PurchasePage() -> impl IntoView {
    let language = use_language();
    let (query, set_query) = create_signal(String::new());

    let total_value: i64 = ORDERS.iter().map(|po| po.value).sum();
    let pending_count = ORDERS
        .iter()
        .filter(|po| po.status == OrderStatus::Pending)
        .count();

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
                        <button class="btn-primary">{t.new_purchase}</button>
                    </div>

                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem;">
                        <StatCard
                            title=t.total_purchases
                            value=group_indian(ORDERS.len() as u64)
                            description=t.this_month
                        />
                        <StatCard
                            title=t.pending_orders
                            value=pending_count.to_string()
                            description=t.this_month
                        />
                        <StatCard
                            title=t.amount
                            value=format_inr(total_value)
                            description=t.this_month
                        />
                    </div>

                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                        <div style="padding: 1.5rem;">
                            <SearchBox placeholder=t.search value=query set_value=set_query/>
                        </div>
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: var(--bg-subtle); text-align: left;">
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.order_id}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.vendor}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.date}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.items}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.value}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.action}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|po| po.id
                                        children=move |po| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{po.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{po.vendor}</td>
                                                <td style="padding: 1rem;">{po.date}</td>
                                                <td style="padding: 1rem;">{po.items}</td>
                                                <td style="padding: 1rem;">{format_inr(po.value)}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(po.status)>{status_label(t, po.status)}</span>
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
