use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::i18n::{use_language, Language};
use crate::models::{Tenant, TenantStatus};
use crate::utils::matches_query;

struct Text {
    title: &'static str,
    subtitle: &'static str,
    tenant_management: &'static str,
    search: &'static str,
    add_tenant: &'static str,
    id: &'static str,
    name: &'static str,
    category: &'static str,
    location: &'static str,
    gstin: &'static str,
    status: &'static str,
    actions: &'static str,
    active: &'static str,
    pending: &'static str,
    inactive: &'static str,
}

const EN: Text = Text {
    title: "Admin Module",
    subtitle: "Manage mall tenants, staff and operations",
    tenant_management: "Tenant Management",
    search: "Search tenants...",
    add_tenant: "Add Tenant",
    id: "ID",
    name: "Name",
    category: "Category",
    location: "Location",
    gstin: "GSTIN",
    status: "Status",
    actions: "Actions",
    active: "Active",
    pending: "Pending",
    inactive: "Inactive",
};

const HI: Text = Text {
    title: "प्रशासन मॉड्यूल",
    subtitle: "मॉल के किरायेदारों, कर्मचारियों और संचालन का प्रबंधन करें",
    tenant_management: "किरायेदार प्रबंधन",
    search: "किरायेदार खोजें...",
    add_tenant: "किरायेदार जोड़ें",
    id: "आईडी",
    name: "नाम",
    category: "श्रेणी",
    location: "स्थान",
    gstin: "जीएसटीआईएन",
    status: "स्थिति",
    actions: "क्रियाएं",
    active: "सक्रिय",
    pending: "लंबित",
    inactive: "निष्क्रिय",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const TENANTS: &[Tenant] = &[
    Tenant { id: "T001", name: "Chennai Silks", category: "Clothing", location: "Ground Floor, G-12", gstin: "33AABCT1234Z1Z5", status: TenantStatus::Active },
    Tenant { id: "T002", name: "Bombay Electronics", category: "Electronics", location: "First Floor, F-05", gstin: "27AADCB9876Y1Z3", status: TenantStatus::Active },
    Tenant { id: "T003", name: "Delhi Sweets", category: "Food & Beverages", location: "Ground Floor, G-22", gstin: "07AAECR7654Z1Z8", status: TenantStatus::Active },
    Tenant { id: "T004", name: "Mumbai Fashion", category: "Fashion", location: "Second Floor, S-15", gstin: "27AAHCM5432X1Z7", status: TenantStatus::Pending },
    Tenant { id: "T005", name: "Kolkata Books", category: "Books & Stationery", location: "First Floor, F-18", gstin: "19AAACP8765Q1Z2", status: TenantStatus::Inactive },
    Tenant { id: "T006", name: "Bangalore Tech", category: "Electronics", location: "Second Floor, S-07", gstin: "29AADCT4567R1Z9", status: TenantStatus::Active },
];

fn status_label(t: &'static Text, status: TenantStatus) -> &'static str {
    match status {
        TenantStatus::Active => t.active,
        TenantStatus::Pending => t.pending,
        TenantStatus::Inactive => t.inactive,
    }
}

fn status_class(status: TenantStatus) -> &'static str {
    match status {
        TenantStatus::Active => "badge badge-green",
        TenantStatus::Pending => "badge badge-orange",
        TenantStatus::Inactive => "badge badge-red",
    }
}

fn filtered(query: &str) -> Vec<Tenant> {
    TENANTS
        .iter()
        .copied()
        .filter(|t| {
            matches_query(
                &[t.id, t.name, t.category, t.location, t.gstin, t.status.as_str()],
                query,
            )
        })
        .collect()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let language = use_language();
    let (query, set_query) = create_signal(String::new());

    view! {
        {move || {
            let t = text(language.get());
            view! {
                <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                    <div>
                        <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin: 0;">{t.title}</h1>
                        <p style="color: var(--text-muted); margin: 0.5rem 0 0 0;">{t.subtitle}</p>
                    </div>

                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                        <div style="padding: 1.5rem; display: flex; align-items: center; gap: 1rem; flex-wrap: wrap;">
                            <h2 style="font-size: 1.25rem; font-weight: 600; color: var(--text-heading); margin: 0; margin-right: auto;">
                                {t.tenant_management}
                            </h2>
                            <SearchBox placeholder=t.search value=query set_value=set_query/>
                            <button class="btn-primary">{t.add_tenant}</button>
                        </div>

                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: var(--bg-subtle); text-align: left;">
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.id}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.name}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.category}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.location}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.gstin}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.actions}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|tenant| tenant.id
                                        children=move |tenant| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem;">{tenant.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{tenant.name}</td>
                                                <td style="padding: 1rem;">{tenant.category}</td>
                                                <td style="padding: 1rem;">{tenant.location}</td>
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{tenant.gstin}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(tenant.status)>{status_label(t, tenant.status)}</span>
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
