use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::i18n::{use_language, Language};
use crate::models::{StockItem, StockStatus};
use crate::utils::matches_query;

struct Text {
    title: &'static str,
    subtitle: &'static str,
    search: &'static str,
    add_item: &'static str,
    id: &'static str,
    item: &'static str,
    store: &'static str,
    category: &'static str,
    quantity: &'static str,
    reorder_level: &'static str,
    status: &'static str,
    actions: &'static str,
    in_stock: &'static str,
    low_stock: &'static str,
    out_of_stock: &'static str,
}

const EN: Text = Text {
    title: "Inventory Module",
    subtitle: "Monitor stock levels across mall stores",
    search: "Search inventory...",
    add_item: "Add Item",
    id: "ID",
    item: "Item",
    store: "Store",
    category: "Category",
    quantity: "Quantity",
    reorder_level: "Reorder Level",
    status: "Status",
    actions: "Actions",
    in_stock: "In Stock",
    low_stock: "Low Stock",
    out_of_stock: "Out of Stock",
};

const HI: Text = Text {
    title: "इन्वेंटरी मॉड्यूल",
    subtitle: "मॉल स्टोर में स्टॉक स्तर की निगरानी करें",
    search: "इन्वेंटरी खोजें...",
    add_item: "वस्तु जोड़ें",
    id: "आईडी",
    item: "वस्तु",
    store: "दुकान",
    category: "श्रेणी",
    quantity: "मात्रा",
    reorder_level: "पुनः-आदेश स्तर",
    status: "स्थिति",
    actions: "क्रियाएं",
    in_stock: "स्टॉक में",
    low_stock: "कम स्टॉक",
    out_of_stock: "स्टॉक समाप्त",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const STOCK: &[StockItem] = &[
    StockItem { id: "INV-001", name: "Silk Saree (Kanchipuram)", store: "Chennai Silks", category: "Clothing", quantity: 145, reorder_level: 30, status: StockStatus::InStock },
    StockItem { id: "INV-002", name: "Smart LED TV 43\"", store: "Bombay Electronics", category: "Electronics", quantity: 12, reorder_level: 15, status: StockStatus::LowStock },
    StockItem { id: "INV-003", name: "Kaju Katli (1kg box)", store: "Delhi Sweets", category: "Food & Beverages", quantity: 68, reorder_level: 25, status: StockStatus::InStock },
    StockItem { id: "INV-004", name: "Designer Kurta Set", store: "Mumbai Fashion", category: "Fashion", quantity: 0, reorder_level: 20, status: StockStatus::OutOfStock },
    StockItem { id: "INV-005", name: "NCERT Textbook Bundle", store: "Kolkata Books", category: "Books & Stationery", quantity: 230, reorder_level: 50, status: StockStatus::InStock },
    StockItem { id: "INV-006", name: "Wireless Earbuds", store: "Bangalore Tech", category: "Electronics", quantity: 8, reorder_level: 25, status: StockStatus::LowStock },
    StockItem { id: "INV-007", name: "Cotton Dhoti", store: "Chennai Silks", category: "Clothing", quantity: 89, reorder_level: 20, status: StockStatus::InStock },
];

fn status_label(t: &'static Text, status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => t.in_stock,
        StockStatus::LowStock => t.low_stock,
        StockStatus::OutOfStock => t.out_of_stock,
    }
}

fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge-green",
        StockStatus::LowStock => "badge badge-orange",
        StockStatus::OutOfStock => "badge badge-red",
    }
}

fn filtered(query: &str) -> Vec<StockItem> {
    STOCK
        .iter()
        .copied()
        .filter(|item| {
            matches_query(
                &[item.id, item.name, item.store, item.category, item.status.as_str()],
                query,
            )
        })
        .collect()
}

#[component]
pub fn InventoryPage() -> impl IntoView {
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
                        <button class="btn-primary">{t.add_item}</button>
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
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.item}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.store}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.category}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.quantity}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.reorder_level}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.actions}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|item| item.id
                                        children=move |item| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{item.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{item.name}</td>
                                                <td style="padding: 1rem;">{item.store}</td>
                                                <td style="padding: 1rem;">{item.category}</td>
                                                <td style="padding: 1rem;">{item.quantity}</td>
                                                <td style="padding: 1rem; color: var(--text-muted);">{item.reorder_level}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(item.status)>{status_label(t, item.status)}</span>
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
